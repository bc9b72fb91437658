use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::PathBuf;

/// Validated simulation parameters.
///
/// Only obtainable through `TryFrom<Config>`, so every `Settings` value has
/// a probability in [0, 1], non-negative limits that fit their types, at
/// least one round, and a pool split that enumeration can handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    delay_factor: Probability,
    capital_limit: Option<Tip>,
    rounds: usize,
    block_limit: Gas,
    pool_size: usize,
    leader_share: usize,
    seed: Option<u64>,
    on_infeasible: Infeasibility,
    output: PathBuf,
}

impl Settings {
    pub fn delay_factor(&self) -> Probability {
        self.delay_factor
    }
    pub fn capital_limit(&self) -> Option<Tip> {
        self.capital_limit
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn block_limit(&self) -> Gas {
        self.block_limit
    }
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }
    pub fn leader_share(&self) -> usize {
        self.leader_share
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn on_infeasible(&self) -> Infeasibility {
        self.on_infeasible
    }
    pub fn output(&self) -> &std::path::Path {
        &self.output
    }
    /// Same settings with a different follower latency.
    pub fn with_delay(&self, delay_factor: Probability) -> Self {
        debug_assert!((0.0..=1.0).contains(&delay_factor));
        Self {
            delay_factor,
            ..self.clone()
        }
    }
    /// Same settings with a different capital ceiling.
    pub fn with_capital(&self, capital_limit: Option<Tip>) -> Self {
        Self {
            capital_limit,
            ..self.clone()
        }
    }
    /// The round solver these settings describe.
    pub fn game(&self) -> Stackelberg {
        Stackelberg::new(
            self.block_limit,
            self.leader_share,
            Follower::new(self.delay_factor, self.capital_limit),
        )
    }
    /// The run's single source of randomness.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl TryFrom<Config> for Settings {
    type Error = ConfigError;
    fn try_from(config: Config) -> Result<Self, Self::Error> {
        if !(0.0..=1.0).contains(&config.delay_factor) {
            return Err(ConfigError::DelayFactor(config.delay_factor));
        }
        let block_limit = Gas::try_from(config.block_limit)
            .map_err(|_| ConfigError::BlockLimit(config.block_limit))?;
        let capital_limit = config
            .capital_limit
            .map(|c| Tip::try_from(c).map_err(|_| ConfigError::CapitalLimit(c)))
            .transpose()?;
        if config.rounds == 0 {
            return Err(ConfigError::Rounds);
        }
        if config.pool_size > POOL_CEILING
            || config.leader_share > config.pool_size
            || config.leader_share > ENUMERATION_CEILING
            || config.pool_size - config.leader_share > ENUMERATION_CEILING
        {
            return Err(ConfigError::Partition {
                pool_size: config.pool_size,
                leader_share: config.leader_share,
            });
        }
        Ok(Self {
            delay_factor: config.delay_factor,
            capital_limit,
            rounds: config.rounds,
            block_limit,
            pool_size: config.pool_size,
            leader_share: config.leader_share,
            seed: config.seed,
            on_infeasible: config.on_infeasible,
            output: PathBuf::from(config.output),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delay_factor: DELAY_FACTOR,
            capital_limit: None,
            rounds: ROUNDS,
            block_limit: BLOCK_LIMIT,
            pool_size: POOL_SIZE,
            leader_share: LEADER_SHARE,
            seed: None,
            on_infeasible: Infeasibility::Abort,
            output: PathBuf::from(EXPORT_DIR),
        }
    }
}

impl std::fmt::Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "rounds {} block {} pool {}/{} delay {:.2} capital {} seed {} on-infeasible {}",
            self.rounds,
            self.block_limit,
            self.leader_share,
            self.pool_size - self.leader_share,
            self.delay_factor,
            self.capital_limit
                .map(|c| c.to_string())
                .unwrap_or_else(|| "none".to_string()),
            self.seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "random".to_string()),
            self.on_infeasible,
        )
    }
}
