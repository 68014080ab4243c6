//! Core types: RNG, configuration, errors.
//!
//! Everything else in the crate threads a `CardRng` and reads its tunables
//! from the config structs defined here.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{CardConfig, PackConfig, SamplerConfig, SimulationConfig, StatDistribution};
pub use error::{CardGenError, Result};
pub use rng::{CardRng, CardRngState};
