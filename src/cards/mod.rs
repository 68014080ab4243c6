//! Card generation: records, identity, and rarity.
//!
//! ## Key Types
//!
//! - `Card`: Immutable generated card with derived stats
//! - `CardId`: Six-symbol base-36 identifier
//! - `Rarity`: Five ordered tiers
//! - `RarityThresholds`: Power rating cutoffs per tier

pub mod card;
pub mod identity;
pub mod rarity;

pub use card::{ability_chance, build_card, build_card_with_factor, power_rating, Card};
pub use identity::{hash_id, CardId};
pub use rarity::{classify_rarity, Rarity, RarityThresholds};
