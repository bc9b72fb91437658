use crate::*;

/// Rounds of one experiment, in play order.
///
/// Payoff series skip rounds without an outcome, so they can be shorter
/// than [`Series::pools`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series(Vec<Round>);

impl Series {
    pub fn rounds(&self) -> &[Round] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome> + '_ {
        self.0.iter().filter_map(Round::outcome)
    }
    /// Every generated pool, including those of skipped rounds.
    pub fn pools(&self) -> impl Iterator<Item = &Pool> + '_ {
        self.0.iter().map(Round::pool)
    }
    pub fn skipped(&self) -> usize {
        self.0.iter().filter(|r| r.skipped()).count()
    }
    pub fn leader(&self) -> Vec<Tip> {
        self.outcomes().map(Outcome::leader_tip).collect()
    }
    pub fn follower(&self) -> Vec<Tip> {
        self.outcomes().map(Outcome::follower_tip).collect()
    }
    /// Leader minus follower payoff per round.
    pub fn advantage(&self) -> Vec<i64> {
        self.outcomes().map(Outcome::advantage).collect()
    }
}

impl From<Vec<Round>> for Series {
    fn from(rounds: Vec<Round>) -> Self {
        Self(rounds)
    }
}

impl FromIterator<Round> for Series {
    fn from_iter<T: IntoIterator<Item = Round>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
