//! Summaries, text charts, and transaction export for finished studies.

mod export;
mod histogram;
mod rolling;
mod sparkline;
mod summary;
mod table;

pub use export::*;
pub use histogram::*;
pub use rolling::*;
pub use sparkline::*;
pub use summary::*;
pub use table::*;
