/// Identifier of a transaction within one round's pool.
///
/// Wraps the zero-based position of the transaction in its [`Pool`](super::Pool)
/// and displays one-based, so the first transaction reads `Tx1`.
/// Ordering is numeric (`Tx2 < Tx10`), which keeps identifier order and pool
/// order identical for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TxId(u8);

impl TxId {
    /// Zero-based position in the pool.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for TxId {
    fn from(index: usize) -> Self {
        debug_assert!(index < crate::POOL_CEILING);
        Self(index as u8)
    }
}
impl From<TxId> for usize {
    fn from(id: TxId) -> Self {
        id.index()
    }
}

impl std::fmt::Display for TxId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Tx{}", self.0 as usize + 1)
    }
}
