use crate::*;

/// The reference experiments, in the order a [`Study`] plays them.
///
/// The two exploitation runs compare leader and follower payoffs; the two
/// latency runs isolate what follower latency is worth to the leader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Experiment {
    /// Latency-perturbed follower, no capital ceiling.
    Latency,
    /// Latency-perturbed follower under a capital ceiling.
    LatencyCapital,
    /// Leader earnings against a latency-perturbed follower.
    WithLatency,
    /// Leader earnings against an always-optimal follower.
    WithoutLatency,
}

impl Experiment {
    pub const fn all() -> [Self; 4] {
        [
            Self::Latency,
            Self::LatencyCapital,
            Self::WithLatency,
            Self::WithoutLatency,
        ]
    }
    /// Specializes the base settings for this experiment.
    ///
    /// The configured delay factor drives every latency run; the configured
    /// capital limit, or [`CAPITAL_LIMIT`] when unset, applies only to
    /// [`Experiment::LatencyCapital`].
    pub fn settings(&self, base: &Settings) -> Settings {
        match self {
            Self::Latency | Self::WithLatency => base.with_capital(None),
            Self::LatencyCapital => {
                base.with_capital(Some(base.capital_limit().unwrap_or(CAPITAL_LIMIT)))
            }
            Self::WithoutLatency => base.with_delay(0.0).with_capital(None),
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Latency => "Latency Only",
            Self::LatencyCapital => "Latency + Capital Limit",
            Self::WithLatency => "With Latency",
            Self::WithoutLatency => "Without Latency",
        }
    }
}

impl std::fmt::Display for Experiment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
