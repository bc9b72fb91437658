//! The auction core: exhaustive bundle enumeration, the follower's
//! response rule, and the leader's equilibrium selection.

mod bundle;
mod candidate;
mod combinations;
mod error;
mod feasible;
mod follower;
mod outcome;
mod solver;

pub use bundle::*;
pub use candidate::*;
pub use combinations::*;
pub use error::*;
pub use feasible::*;
pub use follower::*;
pub use outcome::*;
pub use solver::*;
