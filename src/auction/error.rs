use crate::*;

/// Failures of the round solver.
///
/// Follower infeasibility is not among them: a follower with nothing that
/// fits simply submits no bundle and earns zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuctionError {
    /// The leader cannot fit a single transaction under the block limit.
    NoLeaderMove { limit: Gas },
    /// More candidates than exhaustive enumeration is allowed to visit.
    Oversized { n: usize, max: usize },
    /// An identifier does not name a transaction of the pool.
    UnknownTransaction(TxId),
    /// An identifier appears more than once among the candidates.
    DuplicateTransaction(TxId),
}

impl std::fmt::Display for AuctionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoLeaderMove { limit } => {
                write!(f, "no feasible leader move under block limit {}", limit)
            }
            Self::Oversized { n, max } => {
                write!(f, "cannot enumerate {} candidates (ceiling {})", n, max)
            }
            Self::UnknownTransaction(id) => write!(f, "unknown transaction: {}", id),
            Self::DuplicateTransaction(id) => write!(f, "duplicate transaction: {}", id),
        }
    }
}

impl std::error::Error for AuctionError {}
