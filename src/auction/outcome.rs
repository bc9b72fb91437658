use crate::*;

/// The leader's equilibrium move and the follower's reaction to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    leader: Move,
    follower: Option<Move>,
}

impl Outcome {
    pub fn new(leader: Move, follower: Option<Move>) -> Self {
        Self { leader, follower }
    }
    pub fn leader(&self) -> &Move {
        &self.leader
    }
    pub fn follower(&self) -> Option<&Move> {
        self.follower.as_ref()
    }
    pub fn leader_tip(&self) -> Tip {
        self.leader.tip()
    }
    /// Zero when the follower could not submit anything.
    pub fn follower_tip(&self) -> Tip {
        self.follower.map(|m| m.tip()).unwrap_or_default()
    }
    pub fn total_tip(&self) -> Tip {
        self.leader_tip() + self.follower_tip()
    }
    /// Leader payoff minus follower payoff.
    pub fn advantage(&self) -> i64 {
        self.leader_tip() as i64 - self.follower_tip() as i64
    }
    /// Gas consumed by both players together.
    pub fn gas_used(&self) -> Gas {
        self.leader.gas() + self.follower.map(|m| m.gas()).unwrap_or_default()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.follower {
            Some(ref follower) => write!(f, "leader {} | follower {}", self.leader, follower),
            None => write!(f, "leader {} | follower idle", self.leader),
        }
    }
}
