//! Card records and the card builder.
//!
//! A `Card` is fully derived from `(health, primary_attack)` plus one ambient
//! draw `k` in `{1, 2, 3}`. The secondary attack and ability rolls come from a
//! sub-stream seeded with `health * k`, so any card can be rebuilt exactly
//! from `(health, primary_attack, k)` via [`build_card_with_factor`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::identity::{hash_id, CardId};
use super::rarity::Rarity;
use crate::core::{CardConfig, CardRng};

/// Weight of primary attack in the power rating.
pub const ATTACK_POWER_WEIGHT: f64 = 1.2;

/// Immutable generated card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub health: i64,
    pub primary_attack: i64,
    /// Zero unless the primary attack reached the dual-attack threshold.
    pub secondary_attack: i64,
    pub power_rating: f64,
    pub rarity: Rarity,
    pub has_ability: bool,
    /// The `k` that seeded this card's sub-stream.
    pub seed_factor: u8,
    pub unique_card_id: CardId,
}

impl Card {
    /// Whether the card rolled a secondary attack.
    #[must_use]
    pub fn is_dual_attack(&self) -> bool {
        self.secondary_attack != 0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{:.1}] {}: Health: {}, Att: {}, {}, Ability: {}",
            self.unique_card_id,
            self.power_rating,
            self.rarity,
            self.health,
            self.primary_attack,
            self.secondary_attack,
            self.has_ability
        )
    }
}

/// `health + 1.2 * primary_attack`.
#[must_use]
pub fn power_rating(health: i64, primary_attack: i64) -> f64 {
    health as f64 + ATTACK_POWER_WEIGHT * primary_attack as f64
}

/// Ability probability for a given health; not clamped, values above 1 are
/// certain.
#[must_use]
pub fn ability_chance(config: &CardConfig, health: i64) -> f64 {
    let proximity = health.abs_diff(config.health_reference_point) as f64 / config.health_span;
    config.ability_base_chance + config.extreme_health_ability_boost * proximity
}

/// Seed of the per-card sub-stream.
fn substream_seed(health: i64, seed_factor: u8) -> u64 {
    health.wrapping_mul(i64::from(seed_factor)) as u64
}

/// Build a card, consuming exactly one ambient draw for its seed factor.
pub fn build_card(rng: &mut CardRng, config: &CardConfig, health: i64, primary_attack: i64) -> Card {
    let seed_factor = rng.gen_range_inclusive(1..=3) as u8;
    let rolls = rng.with_substream(substream_seed(health, seed_factor), |sub| {
        roll_extras(sub, config, health, primary_attack)
    });
    assemble(config, health, primary_attack, seed_factor, rolls)
}

/// Build a card from an explicit seed factor. Touches no ambient stream.
#[must_use]
pub fn build_card_with_factor(config: &CardConfig, health: i64, primary_attack: i64, seed_factor: u8) -> Card {
    let mut sub = CardRng::new(substream_seed(health, seed_factor));
    let rolls = roll_extras(&mut sub, config, health, primary_attack);
    assemble(config, health, primary_attack, seed_factor, rolls)
}

/// Secondary attack first, then the ability roll, both from the sub-stream.
fn roll_extras(sub: &mut CardRng, config: &CardConfig, health: i64, primary_attack: i64) -> (i64, bool) {
    let secondary = if primary_attack >= config.dual_attack_threshold {
        let scaled = primary_attack as f64 * sub.uniform(0.25, 0.5);
        (scaled / 10.0).round_ties_even() as i64 * 10
    } else {
        0
    };
    (secondary, sub.gen_f64() < ability_chance(config, health))
}

fn assemble(
    config: &CardConfig,
    health: i64,
    primary_attack: i64,
    seed_factor: u8,
    (secondary_attack, has_ability): (i64, bool),
) -> Card {
    let power_rating = power_rating(health, primary_attack);
    Card {
        health,
        primary_attack,
        secondary_attack,
        power_rating,
        rarity: config.thresholds.classify(power_rating),
        has_ability,
        seed_factor,
        unique_card_id: hash_id(&[health, primary_attack, i64::from(seed_factor)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CardConfig {
        CardConfig::default()
    }

    #[test]
    fn test_rare_dual_attack_card() {
        let mut rng = CardRng::new(42);
        let card = build_card(&mut rng, &config(), 80, 70);

        assert!((card.power_rating - 164.0).abs() < 1e-9);
        assert_eq!(card.rarity, Rarity::Rare);
        assert!(card.secondary_attack > 0);
        assert!(card.is_dual_attack());
        assert_eq!(card.secondary_attack % 10, 0);
        // 70 * [0.25, 0.5) lands on 20 or 30 after rounding.
        assert!((20..=30).contains(&card.secondary_attack));
    }

    #[test]
    fn test_common_single_attack_card() {
        let mut rng = CardRng::new(42);
        let card = build_card(&mut rng, &config(), 30, 10);

        assert!((card.power_rating - 42.0).abs() < 1e-9);
        assert_eq!(card.rarity, Rarity::Common);
        assert_eq!(card.secondary_attack, 0);
        assert!(!card.is_dual_attack());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let at = build_card_with_factor(&config(), 70, 70, 1);
        let below = build_card_with_factor(&config(), 70, 60, 1);
        assert!(at.secondary_attack > 0);
        assert_eq!(below.secondary_attack, 0);
    }

    #[test]
    fn test_seed_factor_range() {
        let mut rng = CardRng::new(5);
        for _ in 0..200 {
            let card = build_card(&mut rng, &config(), 60, 40);
            assert!((1..=3).contains(&card.seed_factor));
        }
    }

    #[test]
    fn test_rebuild_from_factor() {
        let mut rng = CardRng::new(9);
        let card = build_card(&mut rng, &config(), 110, 80);
        let rebuilt = build_card_with_factor(&config(), 110, 80, card.seed_factor);
        assert_eq!(card, rebuilt);
    }

    #[test]
    fn test_id_matches_defining_values() {
        let card = build_card_with_factor(&config(), 80, 70, 2);
        assert_eq!(card.unique_card_id, hash_id(&[80, 70, 2]));
        assert_eq!(card.unique_card_id.as_str(), "XQOJ6O");
    }

    #[test]
    fn test_ability_chance_curve() {
        let config = config();
        assert!((ability_chance(&config, 70) - 0.04).abs() < 1e-12);
        assert!((ability_chance(&config, 150) - 0.64).abs() < 1e-12);
        assert!((ability_chance(&config, 30) - 0.34).abs() < 1e-12);
        assert!(ability_chance(&config, 250) > 1.0);
    }

    #[test]
    fn test_ability_chance_at_extreme_health() {
        let config = config();
        for health in [i64::MIN, i64::MAX] {
            let chance = ability_chance(&config, health);
            assert!(chance.is_finite());
            assert!(chance > 1.0);
        }
        assert!(build_card_with_factor(&config, i64::MIN, 0, 3).has_ability);
    }

    #[test]
    fn test_chance_above_one_is_certain() {
        for factor in 1..=3 {
            assert!(build_card_with_factor(&config(), 300, 10, factor).has_ability);
        }
    }

    #[test]
    fn test_zero_chance_never_rolls_ability() {
        let config = CardConfig {
            ability_base_chance: 0.0,
            extreme_health_ability_boost: 0.0,
            ..CardConfig::default()
        };
        for h in (20..=140).step_by(10) {
            assert!(!build_card_with_factor(&config, h, 30, 2).has_ability);
        }
    }

    #[test]
    fn test_consumes_single_ambient_draw() {
        let mut rng = CardRng::new(77);
        let mut control = CardRng::new(77);

        build_card(&mut rng, &config(), 140, 110);
        control.gen_range_inclusive(1..=3);

        assert_eq!(rng.state(), control.state());
    }

    #[test]
    fn test_display() {
        let card = build_card_with_factor(&config(), 30, 10, 1);
        let text = card.to_string();
        assert!(text.starts_with("HF4GUN [42.0] Common: Health: 30, Att: 10, 0, Ability: "));
    }

    #[test]
    fn test_card_serde() {
        let card = build_card_with_factor(&config(), 90, 70, 3);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
