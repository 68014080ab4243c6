//! Assembly of a single pack.
//!
//! A pack samples `sample_count` health values, builds a card for every value
//! at or above the health floor, sorts the cards by power, and keeps the
//! weakest card, the strongest card, and `random_slots` interior cards drawn
//! without replacement.

use smallvec::SmallVec;

use crate::cards::{build_card, Card};
use crate::core::{CardGenError, CardRng, Result, SimulationConfig};
use crate::stats::{derive_attack, sample_health};

/// Inline capacity of the slot list; the default pack holds 15 cards.
pub type PackSlots = SmallVec<[Card; 15]>;

/// One simulated pack.
#[derive(Clone, Debug, PartialEq)]
pub struct Pack {
    /// Selected cards: weakest first, then the random picks in draw order,
    /// then the strongest.
    pub slots: PackSlots,
    /// Raw health samples the pack was built from, floor not applied.
    pub samples: Vec<f64>,
    /// Cards built from samples that cleared the floor.
    pub cards_made: usize,
    /// Health of every built card that rolled an ability, slotted or not.
    pub ability_healths: Vec<i64>,
}

impl Pack {
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn abilities_made(&self) -> usize {
        self.ability_healths.len()
    }

    /// Guaranteed weakest slot.
    #[must_use]
    pub fn worst(&self) -> Option<&Card> {
        self.slots.first()
    }

    /// Guaranteed strongest slot.
    #[must_use]
    pub fn best(&self) -> Option<&Card> {
        self.slots.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.slots.iter()
    }
}

/// Build every card of one batch, sorted by ascending power.
///
/// Samples below the floor are skipped without drawing. The sort is stable,
/// so equal power keeps sampling order.
pub fn build_pool(rng: &mut CardRng, config: &SimulationConfig) -> Result<(Vec<f64>, Vec<Card>)> {
    let samples = sample_health(rng, &config.sampler, config.pack.sample_count)?;

    let mut cards = Vec::with_capacity(samples.len());
    for &sample in &samples {
        if sample < config.pack.health_floor as f64 {
            continue;
        }
        let health = sample as i64;
        let attack = derive_attack(rng, health);
        cards.push(build_card(rng, &config.card, health, attack));
    }

    cards.sort_by(|a, b| a.power_rating.total_cmp(&b.power_rating));
    Ok((samples, cards))
}

/// Simulate one pack from the given stream.
///
/// # Errors
/// - `InvalidConfiguration` if any section of `config` is rejected
/// - `InsufficientPoolSize` if fewer than `random_slots` interior cards
///   survive the floor; the pack is never silently truncated
pub fn run_pack(rng: &mut CardRng, config: &SimulationConfig) -> Result<Pack> {
    config.pack.validate()?;
    config.card.validate()?;

    let (samples, cards) = build_pool(rng, config)?;
    let required = config.pack.random_slots;
    let available = cards.len().saturating_sub(2);

    if cards.len() < 2 || available < required {
        return Err(CardGenError::InsufficientPoolSize { available, required });
    }

    let cards_made = cards.len();
    let ability_healths = cards.iter().filter(|c| c.has_ability).map(|c| c.health).collect();

    let picks = rng
        .sample_indices(available, required)
        .ok_or(CardGenError::InsufficientPoolSize { available, required })?;

    let mut slots = PackSlots::with_capacity(required + 2);
    slots.push(cards[0].clone());
    slots.extend(picks.iter().map(|&i| cards[i + 1].clone()));
    slots.push(cards[cards_made - 1].clone());

    Ok(Pack {
        slots,
        samples,
        cards_made,
        ability_healths,
    })
}
