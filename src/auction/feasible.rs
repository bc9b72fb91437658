use crate::*;

/// Exhaustive iterator over every non-empty bundle that fits a capacity.
///
/// Visits all 2^n − 1 non-empty subsets of the given identifiers and yields
/// those whose summed gas is at most `limit`, each as a [`Move`]. A subset
/// whose gas or tip sum overflows never fits.
///
/// # Ordering
///
/// Bundles come out by size ascending, then lexicographically by position in
/// the identifier sequence. Callers that break ties by "first found" rely on
/// exactly this order.
///
/// # Cost
///
/// Exponential in `n`. Construction fails for more than
/// [`ENUMERATION_CEILING`] identifiers rather than silently running for hours.
pub struct Feasible<'pool> {
    pool: &'pool Pool,
    ids: Vec<TxId>,
    limit: Gas,
    width: usize,
    inner: Combinations,
}

impl<'pool> Feasible<'pool> {
    pub fn new(pool: &'pool Pool, ids: &[TxId], limit: Gas) -> Result<Self, AuctionError> {
        if ids.len() > ENUMERATION_CEILING {
            return Err(AuctionError::Oversized {
                n: ids.len(),
                max: ENUMERATION_CEILING,
            });
        }
        if let Some(id) = ids.iter().find(|id| pool.get(**id).is_none()) {
            return Err(AuctionError::UnknownTransaction(*id));
        }
        let mut seen = Bundle::empty();
        for id in ids {
            match seen.contains(id) {
                true => return Err(AuctionError::DuplicateTransaction(*id)),
                false => seen = seen.add(*id),
            }
        }
        Ok(Self {
            pool,
            ids: ids.to_vec(),
            limit,
            width: 1,
            inner: Combinations::from((ids.len(), 1)),
        })
    }
    /// Collects every feasible move in enumeration order.
    pub fn moves(pool: &'pool Pool, ids: &[TxId], limit: Gas) -> Result<Vec<Move>, AuctionError> {
        Ok(Self::new(pool, ids, limit)?.collect::<Vec<Move>>())
    }
    fn price(&self, positions: &[usize]) -> Option<Move> {
        let ids = positions.iter().map(|&i| self.ids[i]).collect::<Vec<TxId>>();
        let gas = self.pool.gas(&ids)?;
        let tip = self.pool.tip(&ids)?;
        Some(Move::new(ids.into_iter().collect(), gas, tip))
    }
}

impl Iterator for Feasible<'_> {
    type Item = Move;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next() {
                Some(positions) => match self.price(&positions) {
                    Some(candidate) if candidate.gas() <= self.limit => return Some(candidate),
                    _ => continue,
                },
                None if self.width < self.ids.len() => {
                    self.width += 1;
                    self.inner = Combinations::from((self.ids.len(), self.width));
                }
                None => return None,
            }
        }
    }
}
