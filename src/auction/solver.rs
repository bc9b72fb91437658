use crate::*;
use rand::Rng;

/// One round of the block-space Stackelberg game.
///
/// The leader owns the first `share` transactions of the pool and moves
/// first under the full block `limit`; the follower owns the rest and reacts
/// to whatever capacity the leader leaves behind according to its
/// [`Follower`] rule.
///
/// # Selection
///
/// The follower's reaction is computed for every leader candidate, in
/// enumeration order, before the leader commits. The leader then takes the
/// candidate with the highest own tip, keeping the earliest on ties. The
/// follower's payoff never enters the leader's criterion, and a follower
/// left with nothing to submit never excludes a leader candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stackelberg {
    limit: Gas,
    share: usize,
    follower: Follower,
}

impl Stackelberg {
    pub fn new(limit: Gas, share: usize, follower: Follower) -> Self {
        Self {
            limit,
            share,
            follower,
        }
    }
    pub fn follower(&self) -> &Follower {
        &self.follower
    }
    /// Every leader candidate paired with the follower's reaction to it.
    pub fn frontier<R>(
        &self,
        pool: &Pool,
        rng: &mut R,
    ) -> Result<Vec<(Move, Option<Move>)>, AuctionError>
    where
        R: Rng + ?Sized,
    {
        let (leader, follower) = pool.partition(self.share);
        Feasible::moves(pool, &leader, self.limit)?
            .into_iter()
            .map(|candidate| {
                let remaining = self.limit - candidate.gas();
                self.follower
                    .respond(pool, &follower, remaining, rng)
                    .map(|reaction| (candidate, reaction))
            })
            .collect()
    }
    /// The leader's equilibrium move and the follower's reaction to it.
    pub fn solve<R>(&self, pool: &Pool, rng: &mut R) -> Result<Outcome, AuctionError>
    where
        R: Rng + ?Sized,
    {
        self.frontier(pool, rng)?
            .into_iter()
            .fold(None, |best: Option<(Move, Option<Move>)>, next| match best {
                Some(best) if best.0.tip() >= next.0.tip() => Some(best),
                _ => Some(next),
            })
            .map(|(leader, follower)| Outcome::new(leader, follower))
            .ok_or(AuctionError::NoLeaderMove { limit: self.limit })
    }
}

impl Default for Stackelberg {
    fn default() -> Self {
        Self::new(BLOCK_LIMIT, LEADER_SHARE, Follower::new(DELAY_FACTOR, None))
    }
}
