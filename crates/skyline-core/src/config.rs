//! Game configuration.
//!
//! Every field has a default, so a JSON file only needs the values it
//! changes: `{"seed": 42, "starting_cash": 2000000}`.

use serde::{Deserialize, Serialize};
use skyline_logic::constants::{probabilities, reputation};
use skyline_logic::economics::EconomyParams;
use skyline_logic::generator::EventGenerator;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Session-wide tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,
    pub event_probability: f64,
    pub starting_cash: f64,
    pub starting_reputation: i32,
    /// Days of lease paid up front when leasing an aircraft.
    pub lease_deposit_days: u32,
    pub economy: EconomyParams,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            event_probability: probabilities::BASE_EVENT_PROBABILITY,
            starting_cash: 5_000_000.0,
            starting_reputation: reputation::STARTING,
            lease_deposit_days: 30,
            economy: EconomyParams::default(),
        }
    }
}

impl GameConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.event_probability) {
            return Err(ConfigError::Invalid(format!(
                "event_probability {} is outside [0, 1]",
                self.event_probability
            )));
        }
        if !self.starting_cash.is_finite() || self.starting_cash < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "starting_cash {} must be a non-negative amount",
                self.starting_cash
            )));
        }
        if !(reputation::MIN..=reputation::MAX).contains(&self.starting_reputation) {
            return Err(ConfigError::Invalid(format!(
                "starting_reputation {} is outside [{}, {}]",
                self.starting_reputation,
                reputation::MIN,
                reputation::MAX
            )));
        }
        Ok(())
    }

    /// Event generator honoring the seed and probability settings.
    pub fn build_generator(&self) -> EventGenerator {
        let generator = match self.seed {
            Some(seed) => EventGenerator::seeded(seed),
            None => EventGenerator::from_entropy(),
        };
        generator.with_probability(self.event_probability)
    }
}
