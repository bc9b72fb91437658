use crate::*;
use rand::Rng;
use rand::seq::IndexedRandom;

/// The follower's reaction rule.
///
/// After the leader commits, the follower fills the remaining capacity from
/// its own transactions. With probability `latency` it is too slow to
/// recompute the optimum and submits a uniformly random feasible bundle;
/// otherwise it best-responds with the highest-tip bundle. An optional
/// `capital` ceiling excludes bundles whose total tip exceeds it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Follower {
    latency: Probability,
    capital: Option<Tip>,
}

impl Follower {
    pub fn new(latency: Probability, capital: Option<Tip>) -> Self {
        debug_assert!((0.0..=1.0).contains(&latency));
        Self { latency, capital }
    }
    pub fn capital(&self) -> Option<Tip> {
        self.capital
    }
    /// Bundles the follower would consider under `remaining` gas.
    pub fn eligible(
        &self,
        pool: &Pool,
        ids: &[TxId],
        remaining: Gas,
    ) -> Result<Vec<Move>, AuctionError> {
        let mut moves = Feasible::moves(pool, ids, remaining)?;
        if let Some(ceiling) = self.capital {
            moves.retain(|m| m.tip() <= ceiling);
        }
        Ok(moves)
    }
    /// Chooses the follower's bundle, or `None` when nothing is eligible.
    ///
    /// Draws exactly one uniform value per call with a non-empty eligible
    /// set, plus one index draw when the latency branch fires. An empty set
    /// returns before touching `rng`.
    pub fn respond<R>(
        &self,
        pool: &Pool,
        ids: &[TxId],
        remaining: Gas,
        rng: &mut R,
    ) -> Result<Option<Move>, AuctionError>
    where
        R: Rng + ?Sized,
    {
        let moves = self.eligible(pool, ids, remaining)?;
        if moves.is_empty() {
            return Ok(None);
        }
        if rng.random::<Probability>() < self.latency {
            Ok(moves.choose(rng).copied())
        } else {
            Ok(Move::best(&moves).copied())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    /// A: gas 5 tip 3, B: gas 10 tip 7, C: gas 20 tip 2
    fn abc() -> (Pool, Vec<TxId>) {
        let pool = Pool::from(vec![(5, 3), (10, 7), (20, 2)]);
        let ids = pool.ids().collect();
        (pool, ids)
    }

    #[test]
    fn best_response() {
        let (pool, ids) = abc();
        let ref mut rng = SmallRng::seed_from_u64(0);
        let choice = Follower::new(0.0, None)
            .respond(&pool, &ids, 15, rng)
            .unwrap()
            .unwrap();
        assert_eq!(choice.bundle().to_string(), "{Tx1, Tx2}");
        assert_eq!(choice.gas(), 15);
        assert_eq!(choice.tip(), 10);
    }

    #[test]
    fn capital_ceiling() {
        let (pool, ids) = abc();
        let ref mut rng = SmallRng::seed_from_u64(0);
        let follower = Follower::new(0.0, Some(8));
        let eligible = follower.eligible(&pool, &ids, 15).unwrap();
        assert_eq!(eligible.len(), 2);
        let choice = follower.respond(&pool, &ids, 15, rng).unwrap().unwrap();
        assert_eq!(choice.bundle().to_string(), "{Tx2}");
        assert_eq!(choice.tip(), 7);
    }

    #[test]
    fn ceiling_excludes_everything() {
        let (pool, ids) = abc();
        let ref mut rng = SmallRng::seed_from_u64(0);
        let choice = Follower::new(0.5, Some(0)).respond(&pool, &ids, 15, rng);
        assert_eq!(choice, Ok(None));
    }

    #[test]
    fn infeasible() {
        let (pool, ids) = abc();
        let ref mut rng = SmallRng::seed_from_u64(0);
        let follower = Follower::new(0.0, None);
        assert_eq!(follower.respond(&pool, &ids, 3, rng), Ok(None));
        assert_eq!(follower.respond(&pool, &ids, 0, rng), Ok(None));
    }

    #[test]
    fn infeasible_consumes_no_randomness() {
        let (pool, ids) = abc();
        let ref mut a = SmallRng::seed_from_u64(9);
        let ref mut b = SmallRng::seed_from_u64(9);
        Follower::new(1.0, None).respond(&pool, &ids, 3, a).unwrap();
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn optimal_without_latency() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..256 {
            let pool = Pool::random();
            let (_, ids) = pool.partition(LEADER_SHARE);
            let remaining = rng.random_range(0..=BLOCK_LIMIT);
            let capital = rng.random_bool(0.5).then(|| rng.random_range(0..=20));
            let follower = Follower::new(0.0, capital);
            let eligible = follower.eligible(&pool, &ids, remaining).unwrap();
            let best = eligible.iter().map(Move::tip).max();
            let choice = follower.respond(&pool, &ids, remaining, rng).unwrap();
            assert_eq!(choice.map(|m| m.tip()), best);
            if let Some(choice) = choice {
                assert!(choice.gas() <= remaining);
                assert!(capital.is_none_or(|c| choice.tip() <= c));
            }
        }
    }

    #[test]
    fn latency_stays_eligible() {
        let (pool, ids) = abc();
        let ref mut rng = SmallRng::seed_from_u64(5);
        let follower = Follower::new(1.0, Some(8));
        let eligible = follower.eligible(&pool, &ids, 30).unwrap();
        for _ in 0..256 {
            let choice = follower.respond(&pool, &ids, 30, rng).unwrap().unwrap();
            assert!(eligible.contains(&choice));
        }
    }

    #[test]
    fn latency_explores() {
        let (pool, ids) = abc();
        let ref mut rng = SmallRng::seed_from_u64(5);
        let follower = Follower::new(1.0, None);
        let picks = (0..512)
            .filter_map(|_| follower.respond(&pool, &ids, 35, rng).unwrap())
            .map(|m| m.bundle())
            .collect::<std::collections::BTreeSet<_>>();
        assert_eq!(picks.len(), follower.eligible(&pool, &ids, 35).unwrap().len());
    }

    #[test]
    fn reproducible() {
        let pool = Pool::random();
        let (_, ids) = pool.partition(LEADER_SHARE);
        let follower = Follower::new(0.5, None);
        let ref mut a = SmallRng::seed_from_u64(77);
        let ref mut b = SmallRng::seed_from_u64(77);
        for remaining in 0..=BLOCK_LIMIT {
            assert_eq!(
                follower.respond(&pool, &ids, remaining, a),
                follower.respond(&pool, &ids, remaining, b),
            );
        }
    }
}
