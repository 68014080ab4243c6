//! Rarity tiers and the power-rating classifier.
//!
//! Tiers are contiguous bands over `[0, inf)`, evaluated highest-first:
//!
//! | power rating >= | tier |
//! |---|---|
//! | 200 | Legendary |
//! | 170 | Ultra Rare |
//! | 138 | Rare |
//! | 106 | Uncommon |
//! | (else) | Common |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{CardGenError, Result};

/// Ordered rarity tier. `Ord` follows tier rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    UltraRare,
    Legendary,
}

impl Rarity {
    /// All tiers, lowest first.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::UltraRare,
        Rarity::Legendary,
    ];

    /// Zero-based rank, lowest tier first.
    #[must_use]
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::UltraRare => "Ultra Rare",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lower bounds (inclusive) of every tier above Common.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RarityThresholds {
    pub uncommon: f64,
    pub rare: f64,
    pub ultra_rare: f64,
    pub legendary: f64,
}

impl Default for RarityThresholds {
    fn default() -> Self {
        Self {
            uncommon: 106.0,
            rare: 138.0,
            ultra_rare: 170.0,
            legendary: 200.0,
        }
    }
}

impl RarityThresholds {
    /// Classify a power rating, highest tier first.
    #[must_use]
    pub fn classify(&self, power_rating: f64) -> Rarity {
        if power_rating >= self.legendary {
            Rarity::Legendary
        } else if power_rating >= self.ultra_rare {
            Rarity::UltraRare
        } else if power_rating >= self.rare {
            Rarity::Rare
        } else if power_rating >= self.uncommon {
            Rarity::Uncommon
        } else {
            Rarity::Common
        }
    }

    /// Thresholds must be finite and strictly ascending so the bands never
    /// overlap.
    pub fn validate(&self) -> Result<()> {
        let bounds = [self.uncommon, self.rare, self.ultra_rare, self.legendary];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(CardGenError::config("rarity thresholds must be finite"));
        }
        if bounds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(CardGenError::config(format!(
                "rarity thresholds must be strictly ascending, got {bounds:?}"
            )));
        }
        Ok(())
    }
}

/// Classify with the default thresholds.
#[must_use]
pub fn classify_rarity(power_rating: f64) -> Rarity {
    RarityThresholds::default().classify(power_rating)
}
