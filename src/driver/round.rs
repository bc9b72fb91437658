use crate::*;

/// One played round: its pool and, unless the leader was stuck, its outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    index: usize,
    pool: Pool,
    outcome: Option<Outcome>,
}

impl Round {
    pub fn new(index: usize, pool: Pool, outcome: Option<Outcome>) -> Self {
        Self {
            index,
            pool,
            outcome,
        }
    }
    /// Zero-based position within its series.
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn pool(&self) -> &Pool {
        &self.pool
    }
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }
    pub fn skipped(&self) -> bool {
        self.outcome.is_none()
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.outcome {
            Some(ref outcome) => write!(f, "round {:>4} {}", self.index + 1, outcome),
            None => write!(f, "round {:>4} skipped", self.index + 1),
        }
    }
}
