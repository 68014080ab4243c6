//! Raw health sampling and attack derivation.
//!
//! Health values are drawn from the configured distribution and snapped to
//! the nearest multiple of 10. Values below the health floor are left in the
//! output; the pack simulator discards them.

use rand_distr::Normal;

use super::logistic::Logistic;
use crate::core::{CardGenError, CardRng, Result, SamplerConfig, StatDistribution};

/// Stat granularity: health and attacks are multiples of this.
pub const STAT_STEP: f64 = 10.0;

/// Lower bound of the attack ratio, as a fraction of health.
pub const MIN_ATTACK_RATIO: f64 = 0.3;

/// Scale applied to the raw attack before snapping.
pub const ATTACK_SCALE: f64 = 0.8;

/// Snap to the nearest multiple of 10, ties to even.
#[must_use]
pub fn round_to_step(value: f64) -> f64 {
    (value / STAT_STEP).round_ties_even() * STAT_STEP
}

/// A validated health distribution, built once per pack.
#[derive(Clone, Debug)]
pub enum HealthDistribution {
    Normal(Normal<f64>),
    Logistic(Logistic),
}

impl HealthDistribution {
    /// Build the distribution described by `config`.
    ///
    /// # Errors
    /// `InvalidConfiguration` when the parameters cannot describe a
    /// distribution.
    pub fn from_config(config: &SamplerConfig) -> Result<Self> {
        config.validate()?;
        match config.distribution {
            StatDistribution::Normal => Normal::new(config.mean, config.std_dev)
                .map(HealthDistribution::Normal)
                .map_err(|e| CardGenError::config(format!("normal distribution: {e}"))),
            StatDistribution::Logistic => {
                Logistic::from_normal_parameters(config.mean, config.std_dev).map(HealthDistribution::Logistic)
            }
        }
    }

    /// One raw, unrounded draw.
    pub fn draw(&self, rng: &mut CardRng) -> f64 {
        match self {
            HealthDistribution::Normal(d) => rng.sample(d),
            HealthDistribution::Logistic(d) => rng.sample(d),
        }
    }
}

/// Draw `count` health values, each snapped to a multiple of 10.
///
/// # Errors
/// `InvalidConfiguration` if the sampler parameters are rejected; nothing is
/// drawn in that case.
pub fn sample_health(rng: &mut CardRng, config: &SamplerConfig, count: usize) -> Result<Vec<f64>> {
    let distribution = HealthDistribution::from_config(config)?;
    Ok((0..count).map(|_| round_to_step(distribution.draw(rng))).collect())
}

/// Primary attack for a card of the given health.
///
/// Draws `a ~ U(0.3h, h)` and returns `round(0.8a / 10) * 10`.
pub fn derive_attack(rng: &mut CardRng, health: i64) -> i64 {
    let h = health as f64;
    let raw = rng.uniform(MIN_ATTACK_RATIO * h, h);
    round_to_step(ATTACK_SCALE * raw) as i64
}
