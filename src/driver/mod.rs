//! Repeated rounds and the reference experiments built on them.

mod driver;
mod experiment;
mod round;
mod series;
mod study;

pub use driver::*;
pub use experiment::*;
pub use round::*;
pub use series::*;
pub use study::*;
