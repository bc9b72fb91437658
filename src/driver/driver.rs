use crate::*;
use rand::Rng;

/// Plays independent rounds under fixed settings.
///
/// Each round draws a fresh pool from the shared random source, solves it,
/// and hands the pool back inside its [`Round`]; nothing carries over from
/// one round to the next except the state of `rng`.
pub struct Driver {
    settings: Settings,
    game: Stackelberg,
}

impl From<Settings> for Driver {
    fn from(settings: Settings) -> Self {
        Self {
            game: settings.game(),
            settings,
        }
    }
}

impl Driver {
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    /// Plays round `index`.
    ///
    /// A stuck leader either aborts or yields a skipped round, according to
    /// [`Settings::on_infeasible`]. Other failures always propagate.
    pub fn play<R>(&self, index: usize, rng: &mut R) -> Result<Round, AuctionError>
    where
        R: Rng + ?Sized,
    {
        let pool = Pool::sample(rng, self.settings.pool_size());
        match self.game.solve(&pool, rng) {
            Ok(outcome) => {
                log::debug!("round {:>4} {}", index + 1, outcome);
                Ok(Round::new(index, pool, Some(outcome)))
            }
            Err(e @ AuctionError::NoLeaderMove { .. }) => match self.settings.on_infeasible() {
                Infeasibility::Skip => {
                    log::warn!("round {:>4} skipped: {}", index + 1, e);
                    Ok(Round::new(index, pool, None))
                }
                Infeasibility::Abort => Err(e),
            },
            Err(e) => Err(e),
        }
    }
    /// Plays every configured round in order.
    pub fn run<R>(&self, rng: &mut R) -> Result<Series, AuctionError>
    where
        R: Rng + ?Sized,
    {
        log::info!("playing {}", self.settings);
        let series = (0..self.settings.rounds())
            .map(|i| self.play(i, rng))
            .collect::<Result<Series, AuctionError>>()?;
        log::info!(
            "finished {} rounds ({} skipped)",
            series.len(),
            series.skipped()
        );
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn settings(json: &str) -> Settings {
        Settings::try_from(Config::try_from(json).unwrap()).unwrap()
    }

    #[test]
    fn plays_every_round() {
        let driver = Driver::from(settings(r#"{ "rounds": 25 }"#));
        let series = driver.run(&mut SmallRng::seed_from_u64(0)).unwrap();
        assert_eq!(series.len(), 25);
        assert_eq!(series.leader().len(), 25);
        assert_eq!(series.follower().len(), 25);
        assert!(series.rounds().iter().enumerate().all(|(i, r)| r.index() == i));
        assert!(series.pools().all(|p| p.size() == POOL_SIZE));
    }

    #[test]
    fn reproducible_with_seed() {
        let driver = Driver::from(settings(r#"{ "rounds": 20 }"#));
        let a = driver.run(&mut SmallRng::seed_from_u64(8)).unwrap();
        let b = driver.run(&mut SmallRng::seed_from_u64(8)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rounds_are_independent_draws() {
        let driver = Driver::from(settings(r#"{ "rounds": 10 }"#));
        let series = driver.run(&mut SmallRng::seed_from_u64(3)).unwrap();
        let pools = series.pools().collect::<Vec<_>>();
        assert!(pools.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn capacity_respected() {
        let driver = Driver::from(settings(r#"{ "rounds": 50, "delay_factor": 0.7, "capital_limit": 6 }"#));
        let series = driver.run(&mut SmallRng::seed_from_u64(5)).unwrap();
        for outcome in series.outcomes() {
            assert!(outcome.gas_used() <= BLOCK_LIMIT);
            assert!(outcome.follower_tip() <= 6);
        }
    }

    #[test]
    fn stuck_leader_aborts() {
        let driver = Driver::from(settings(r#"{ "rounds": 5, "block_limit": 4 }"#));
        assert_eq!(
            driver.run(&mut SmallRng::seed_from_u64(0)),
            Err(AuctionError::NoLeaderMove { limit: 4 })
        );
    }

    #[test]
    fn stuck_leader_skips() {
        let driver = Driver::from(settings(
            r#"{ "rounds": 5, "block_limit": 4, "on_infeasible": "skip" }"#,
        ));
        let series = driver.run(&mut SmallRng::seed_from_u64(0)).unwrap();
        assert_eq!(series.len(), 5);
        assert_eq!(series.skipped(), 5);
        assert!(series.leader().is_empty());
        assert_eq!(series.pools().count(), 5);
    }
}
