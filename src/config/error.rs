/// Rejected configuration, reported before any round is played.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    DelayFactor(f64),
    BlockLimit(i64),
    CapitalLimit(i64),
    Rounds,
    Partition { pool_size: usize, leader_share: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DelayFactor(p) => write!(f, "delay factor must lie in [0, 1], got {}", p),
            Self::BlockLimit(n) => write!(f, "block limit must be a non-negative gas amount, got {}", n),
            Self::CapitalLimit(n) => write!(f, "capital limit must be a non-negative tip amount, got {}", n),
            Self::Rounds => write!(f, "at least one round is required"),
            Self::Partition {
                pool_size,
                leader_share,
            } => write!(
                f,
                "cannot split {} transactions with leader share {} (each side at most {}, pool at most {})",
                pool_size,
                leader_share,
                crate::ENUMERATION_CEILING,
                crate::POOL_CEILING,
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
