//! Error taxonomy for card generation and pack simulation.
//!
//! Generation is pure given its seeds, so every error is a configuration or
//! input problem. Nothing here is retried.

use thiserror::Error;

/// Errors surfaced by the generator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CardGenError {
    /// A configuration value was rejected before any sampling took place.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Too few interior cards survived the health floor to fill the random
    /// pack slots.
    #[error("insufficient pool size: {available} interior cards available, {required} required")]
    InsufficientPoolSize { available: usize, required: usize },

    /// A string could not be parsed as a card identifier.
    #[error("invalid card id: {0:?}")]
    InvalidCardId(String),
}

impl CardGenError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        CardGenError::InvalidConfiguration(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CardGenError>;
