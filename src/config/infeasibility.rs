use serde::Deserialize;

/// What the driver does when a round leaves the leader without any move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Infeasibility {
    /// Stop the whole run and report the error.
    #[default]
    Abort,
    /// Log the round, keep its pool for export, and move on.
    Skip,
}

impl std::fmt::Display for Infeasibility {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Abort => write!(f, "abort"),
            Self::Skip => write!(f, "skip"),
        }
    }
}
