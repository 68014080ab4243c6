//! Generation and simulation configuration.
//!
//! Every tunable of the generator is a named field with a documented default:
//! - `SamplerConfig`: distribution shape and parameters for raw health values
//! - `CardConfig`: dual-attack threshold, ability odds, rarity thresholds
//! - `PackConfig`: samples per pack, random slot count, health floor
//! - `SimulationConfig`: combines all of the above with a seed and pack count
//!
//! All structs deserialize with per-field defaults, so a config file only
//! needs to name the values it changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{CardGenError, Result};
use crate::cards::RarityThresholds;

/// Shape of the distribution raw health values are drawn from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatDistribution {
    /// Gaussian with location `mean` and scale `std_dev`.
    #[default]
    Normal,
    /// Logistic with location `mean` and scale `std_dev / 1.813`.
    Logistic,
}

impl StatDistribution {
    /// Lowercase name used in config files and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StatDistribution::Normal => "normal",
            StatDistribution::Logistic => "logistic",
        }
    }
}

impl fmt::Display for StatDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatDistribution {
    type Err = CardGenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(StatDistribution::Normal),
            "logistic" => Ok(StatDistribution::Logistic),
            other => Err(CardGenError::config(format!(
                "unknown distribution {other:?}, expected \"normal\" or \"logistic\""
            ))),
        }
    }
}

/// Parameters of the raw health distribution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Distribution shape (default: normal).
    pub distribution: StatDistribution,
    /// Location of the distribution (default: 50).
    pub mean: f64,
    /// Spread of the distribution (default: 32).
    pub std_dev: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            distribution: StatDistribution::Normal,
            mean: 50.0,
            std_dev: 32.0,
        }
    }
}

impl SamplerConfig {
    /// Reject parameters no distribution can be built from.
    pub fn validate(&self) -> Result<()> {
        if !self.mean.is_finite() {
            return Err(CardGenError::config(format!("mean must be finite, got {}", self.mean)));
        }
        if !self.std_dev.is_finite() || self.std_dev <= 0.0 {
            return Err(CardGenError::config(format!(
                "std_dev must be finite and positive, got {}",
                self.std_dev
            )));
        }
        Ok(())
    }
}

/// Constants of the card builder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Primary attack at or above which a secondary attack is rolled (default: 70).
    pub dual_attack_threshold: i64,
    /// Ability chance of a card sitting exactly on the reference health (default: 0.04).
    pub ability_base_chance: f64,
    /// Extra ability chance per unit of normalized health distance (default: 0.60).
    pub extreme_health_ability_boost: f64,
    /// Health value the ability distance is measured from (default: 70).
    pub health_reference_point: i64,
    /// Health distance that counts as one full unit of proximity (default: 80).
    pub health_span: f64,
    /// Power rating cutoffs for each rarity tier.
    pub thresholds: RarityThresholds,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            dual_attack_threshold: 70,
            ability_base_chance: 0.04,
            extreme_health_ability_boost: 0.60,
            health_reference_point: 70,
            health_span: 80.0,
            thresholds: RarityThresholds::default(),
        }
    }
}

impl CardConfig {
    /// Validate the ability parameters and rarity thresholds.
    pub fn validate(&self) -> Result<()> {
        if !self.health_span.is_finite() || self.health_span <= 0.0 {
            return Err(CardGenError::config(format!(
                "health_span must be finite and positive, got {}",
                self.health_span
            )));
        }
        if !self.ability_base_chance.is_finite() || !self.extreme_health_ability_boost.is_finite() {
            return Err(CardGenError::config("ability chances must be finite"));
        }
        self.thresholds.validate()
    }
}

/// Shape of a single pack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackConfig {
    /// Raw health samples drawn per pack (default: 28).
    pub sample_count: usize,
    /// Interior cards drawn without replacement into the pack (default: 13).
    pub random_slots: usize,
    /// Samples below this health are discarded (default: 20).
    pub health_floor: i64,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            sample_count: 28,
            random_slots: 13,
            health_floor: 20,
        }
    }
}

impl PackConfig {
    /// Worst card + best card + random interior picks.
    #[must_use]
    pub const fn pack_size(&self) -> usize {
        self.random_slots + 2
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            return Err(CardGenError::config("sample_count must be at least 1"));
        }
        Ok(())
    }
}

/// Complete configuration of one generation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed of the session; every pack stream is derived from it (default: 42).
    pub seed: u64,
    /// Packs simulated per session (default: 10).
    pub pack_count: usize,
    pub sampler: SamplerConfig,
    pub pack: PackConfig,
    pub card: CardConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            pack_count: 10,
            sampler: SamplerConfig::default(),
            pack: PackConfig::default(),
            card: CardConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom pack count.
    #[must_use]
    pub fn with_pack_count(mut self, count: usize) -> Self {
        self.pack_count = count;
        self
    }

    /// Create a new config with a different health distribution.
    #[must_use]
    pub fn with_distribution(mut self, distribution: StatDistribution, mean: f64, std_dev: f64) -> Self {
        self.sampler = SamplerConfig {
            distribution,
            mean,
            std_dev,
        };
        self
    }

    /// Create a new config with custom samples per pack.
    #[must_use]
    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.pack.sample_count = count;
        self
    }

    /// Create a new config with a custom card builder configuration.
    #[must_use]
    pub fn with_card(mut self, card: CardConfig) -> Self {
        self.card = card;
        self
    }

    /// Parse a TOML document; missing fields keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| CardGenError::config(format!("malformed config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section. Called before any sampling.
    pub fn validate(&self) -> Result<()> {
        if self.pack_count == 0 {
            return Err(CardGenError::config("pack_count must be at least 1"));
        }
        self.sampler.validate()?;
        self.pack.validate()?;
        self.card.validate()
    }
}
