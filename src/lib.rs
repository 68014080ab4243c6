//! # card-forge
//!
//! Procedural trading-card stat generation and booster pack simulation.
//!
//! ## Pipeline
//!
//! 1. **Stat sampling**: raw health values from a normal or logistic
//!    distribution, snapped to multiples of 10; attack derived from health.
//! 2. **Card building**: power rating, rarity, secondary attack, ability
//!    flag, and a short base-36 id.
//! 3. **Pack simulation**: weakest and strongest card plus random interior
//!    picks per pack, rarity counters across many packs.
//!
//! ## Determinism
//!
//! All randomness flows through an explicit `CardRng`. Per-card rolls use a
//! scoped sub-stream seeded from the card's own stats, and every pack of a
//! session draws from a stream derived from `(seed, pack index)`, so a
//! session is reproducible from its seed alone.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Card records, identity hashing, rarity tiers
//! - `stats`: Health distributions and attack derivation
//! - `packs`: Pack assembly, session tallies, summaries
//! - `render`: Card renderer and distribution plotter seams

pub mod cards;
pub mod core;
pub mod packs;
pub mod render;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    CardConfig, CardGenError, CardRng, CardRngState, PackConfig, Result, SamplerConfig, SimulationConfig,
    StatDistribution,
};

pub use crate::cards::{
    build_card, build_card_with_factor, classify_rarity, hash_id, Card, CardId, Rarity, RarityThresholds,
};

pub use crate::stats::{derive_attack, sample_health, HealthDistribution, Logistic};

pub use crate::packs::{run_pack, Odds, Pack, RarityLine, SessionSummary, SessionTally, Simulator};

pub use crate::render::{CardRenderer, DistributionPlotter, Histogram, TextCardRenderer};
