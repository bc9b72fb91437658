use crate::*;
use rand::Rng;

/// The transactions generated for one round, in identifier order.
///
/// Created fresh at the start of a round and discarded with it; the driver
/// keeps each round's pool only so that it can be exported afterwards.
/// Position `i` holds the transaction identified by `TxId::from(i)`.
///
/// The leader sees the first `share` transactions and the follower the rest.
/// Every transaction belongs to exactly one side.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pool(Vec<Transaction>);

impl Pool {
    /// Draws `size` independent transactions.
    pub fn sample<R>(rng: &mut R, size: usize) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::from((0..size).map(|_| Transaction::sample(rng)).collect::<Vec<_>>())
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, id: TxId) -> Option<&Transaction> {
        self.0.get(id.index())
    }
    /// Every identifier, in pool order.
    pub fn ids(&self) -> impl Iterator<Item = TxId> + '_ {
        (0..self.size()).map(TxId::from)
    }
    pub fn iter(&self) -> impl Iterator<Item = (TxId, &Transaction)> + '_ {
        self.0.iter().enumerate().map(|(i, tx)| (TxId::from(i), tx))
    }
    /// Splits identifiers into (leader, follower) sides.
    ///
    /// Fixed rather than adaptive: the first `share` identifiers go to the
    /// leader. A `share` beyond the pool size leaves the follower empty.
    pub fn partition(&self, share: usize) -> (Vec<TxId>, Vec<TxId>) {
        let share = share.min(self.size());
        let leader = self.ids().take(share).collect();
        let follower = self.ids().skip(share).collect();
        (leader, follower)
    }
    /// Summed gas over a set of identifiers, or `None` if any is missing
    /// or the sum overflows.
    pub fn gas<'a, I>(&self, ids: I) -> Option<Gas>
    where
        I: IntoIterator<Item = &'a TxId>,
    {
        ids.into_iter()
            .try_fold(0 as Gas, |sum, id| sum.checked_add(self.get(*id)?.gas()))
    }
    /// Summed tip over a set of identifiers, or `None` if any is missing
    /// or the sum overflows.
    pub fn tip<'a, I>(&self, ids: I) -> Option<Tip>
    where
        I: IntoIterator<Item = &'a TxId>,
    {
        ids.into_iter()
            .try_fold(0 as Tip, |sum, id| sum.checked_add(self.get(*id)?.tip()))
    }
}

impl From<Vec<Transaction>> for Pool {
    fn from(txs: Vec<Transaction>) -> Self {
        debug_assert!(txs.len() <= POOL_CEILING);
        Self(txs)
    }
}
impl From<Vec<(Gas, Tip)>> for Pool {
    fn from(pairs: Vec<(Gas, Tip)>) -> Self {
        Self::from(pairs.into_iter().map(Transaction::from).collect::<Vec<_>>())
    }
}
impl From<Pool> for Vec<Transaction> {
    fn from(pool: Pool) -> Self {
        pool.0
    }
}

impl Arbitrary for Pool {
    fn random() -> Self {
        Self::sample(&mut rand::rng(), POOL_SIZE)
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (id, tx) in self.iter() {
            writeln!(f, "{:<5} {}", id.to_string(), tx)?;
        }
        Ok(())
    }
}
