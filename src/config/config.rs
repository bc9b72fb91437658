use crate::*;
use serde::Deserialize;

/// Simulation options as the user supplies them.
///
/// Values are signed and unchecked; [`Settings`] validates them. Missing
/// fields in a JSON file fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub delay_factor: f64,
    pub capital_limit: Option<i64>,
    pub rounds: usize,
    pub block_limit: i64,
    pub pool_size: usize,
    pub leader_share: usize,
    pub seed: Option<u64>,
    pub on_infeasible: Infeasibility,
    pub output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delay_factor: DELAY_FACTOR,
            capital_limit: None,
            rounds: ROUNDS,
            block_limit: BLOCK_LIMIT as i64,
            pool_size: POOL_SIZE,
            leader_share: LEADER_SHARE,
            seed: None,
            on_infeasible: Infeasibility::default(),
            output: EXPORT_DIR.to_string(),
        }
    }
}

impl Config {
    /// Reads a JSON options file.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read config {}: {}", path.display(), e))?;
        Self::try_from(text.as_str())
    }
}

impl TryFrom<&str> for Config {
    type Error = anyhow::Error;
    fn try_from(json: &str) -> Result<Self, Self::Error> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        assert_eq!(Config::try_from("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_json() {
        let config = Config::try_from(
            r#"{ "delay_factor": 0.0, "capital_limit": 10, "seed": 42, "on_infeasible": "skip" }"#,
        )
        .unwrap();
        assert_eq!(config.delay_factor, 0.0);
        assert_eq!(config.capital_limit, Some(10));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.on_infeasible, Infeasibility::Skip);
        assert_eq!(config.rounds, ROUNDS);
        assert_eq!(config.block_limit, BLOCK_LIMIT as i64);
    }

    #[test]
    fn negative_values_survive_parsing() {
        let config = Config::try_from(r#"{ "block_limit": -1, "capital_limit": -5 }"#).unwrap();
        assert_eq!(config.block_limit, -1);
        assert_eq!(config.capital_limit, Some(-5));
    }

    #[test]
    fn loads_file() {
        let path = std::env::temp_dir().join(format!("stackelberg-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "rounds": 7, "seed": 3 }"#).unwrap();
        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.rounds, 7);
        assert_eq!(config.seed, Some(3));
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn unknown_policy_rejected() {
        assert!(Config::try_from(r#"{ "on_infeasible": "retry" }"#).is_err());
    }
}
