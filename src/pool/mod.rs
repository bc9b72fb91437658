//! Transactions and the per-round transaction pool.

mod pool;
mod transaction;
mod txid;

pub use pool::*;
pub use transaction::*;
pub use txid::*;
