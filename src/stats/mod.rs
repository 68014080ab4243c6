//! Stat sampling: raw health distributions and attack derivation.

pub mod logistic;
pub mod sampler;

pub use logistic::Logistic;
pub use sampler::{derive_attack, round_to_step, sample_health, HealthDistribution, STAT_STEP};
