//! Simulation options and their validation.

mod config;
mod error;
mod infeasibility;
mod settings;

pub use config::*;
pub use error::*;
pub use infeasibility::*;
pub use settings::*;
