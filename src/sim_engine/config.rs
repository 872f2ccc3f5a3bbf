use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::sim_engine::error::SimError;

pub const DEFAULT_ROUNDS: u64 = 10_000;
pub const DEFAULT_REPORT_EVERY: u64 = 1_000;

/// Settings for a multi-round win-rate run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of rounds to simulate.
    pub rounds: u64,
    /// Emit an interim snapshot every this many rounds.
    pub report_every: u64,
    /// Fixed RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            rounds: DEFAULT_ROUNDS,
            report_every: DEFAULT_REPORT_EVERY,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.report_every == 0 {
            return Err(SimError::InvalidConfig("report_every must be at least 1".into()));
        }
        Ok(())
    }

    /// The RNG a run should use: seeded when `seed` is set, entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults_match_reference_run() {
        let config = SimConfig::default();
        assert_eq!(config.rounds, 10_000);
        assert_eq!(config.report_every, 1_000);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let config = SimConfig { report_every: 0, ..SimConfig::default() };
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = SimConfig { seed: Some(7), ..SimConfig::default() };
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: SimConfig = serde_json::from_str(r#"{ "rounds": 500 }"#).unwrap();
        assert_eq!(config, SimConfig { rounds: 500, ..SimConfig::default() });
    }
}
