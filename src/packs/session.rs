//! Multi-pack sessions and rarity accumulation.
//!
//! Pack `i` of a session always draws from `CardRng::for_pack(seed, i)`, so a
//! session is reproducible from its seed and the packs are independent of
//! one another. The sequential and parallel runners therefore produce the
//! same tally.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pack::{run_pack, Pack};
use super::summary::{RarityLine, SessionSummary};
use crate::cards::{Card, Rarity};
use crate::core::{CardRng, Result, SimulationConfig};
use crate::render::DistributionPlotter;

/// Running counters over the packs of a session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionTally {
    pub packs: u64,
    /// Indexed by `Rarity::rank`.
    pub rarity_counts: [u64; 5],
    pub total_slots: u64,
    pub cards_made: u64,
    pub abilities_made: u64,
    /// Ability count per card health.
    pub ability_bins: FxHashMap<i64, u64>,
    /// Strongest card seen; the first one wins ties.
    pub best_card: Option<Card>,
}

impl SessionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally every slot of `pack`.
    pub fn record(&mut self, pack: &Pack) {
        self.packs += 1;
        for card in pack.iter() {
            self.rarity_counts[card.rarity.rank()] += 1;
            self.total_slots += 1;
        }

        self.cards_made += pack.cards_made as u64;
        self.abilities_made += pack.abilities_made() as u64;
        for &health in &pack.ability_healths {
            *self.ability_bins.entry(health).or_insert(0) += 1;
        }

        if let Some(best) = pack.best() {
            self.offer_best(best);
        }
    }

    /// Fold a later tally into this one.
    pub fn merge(&mut self, other: SessionTally) {
        self.packs += other.packs;
        for (mine, theirs) in self.rarity_counts.iter_mut().zip(other.rarity_counts) {
            *mine += theirs;
        }
        self.total_slots += other.total_slots;
        self.cards_made += other.cards_made;
        self.abilities_made += other.abilities_made;
        for (health, count) in other.ability_bins {
            *self.ability_bins.entry(health).or_insert(0) += count;
        }
        if let Some(best) = &other.best_card {
            self.offer_best(best);
        }
    }

    fn offer_best(&mut self, candidate: &Card) {
        let replace = self
            .best_card
            .as_ref()
            .map_or(true, |current| candidate.power_rating > current.power_rating);
        if replace {
            self.best_card = Some(candidate.clone());
        }
    }

    #[must_use]
    pub fn count(&self, rarity: Rarity) -> u64 {
        self.rarity_counts[rarity.rank()]
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        let mut ability_histogram: Vec<(i64, u64)> = self.ability_bins.iter().map(|(&h, &c)| (h, c)).collect();
        ability_histogram.sort_unstable();

        SessionSummary {
            packs: self.packs,
            cards_made: self.cards_made,
            abilities_made: self.abilities_made,
            total_slots: self.total_slots,
            rarities: Rarity::ALL
                .iter()
                .map(|&r| RarityLine::new(r, self.count(r), self.total_slots))
                .collect(),
            ability_histogram,
            best_card: self.best_card.clone(),
        }
    }
}

/// Runs packs and sessions for one validated configuration.
#[derive(Clone, Debug)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// # Errors
    /// `InvalidConfiguration` if any section of `config` is rejected.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulate pack `index` of the session.
    pub fn run_pack(&self, index: u64) -> Result<Pack> {
        let mut rng = CardRng::for_pack(self.config.seed, index);
        run_pack(&mut rng, &self.config)
    }

    /// Run every pack in order.
    pub fn run_session(&self) -> Result<SessionTally> {
        self.run_session_observed(|_, _| {})
    }

    /// Run every pack in order, handing each pack's raw health samples to
    /// `plotter`.
    pub fn run_session_with(&self, plotter: &mut dyn DistributionPlotter) -> Result<SessionTally> {
        self.run_session_observed(|index, pack| plotter.plot(&pack.samples, &format!("Pack {index} health")))
    }

    /// Run every pack in order, calling `observe` once per pack before it is
    /// tallied. Each pack is built exactly once.
    pub fn run_session_observed(&self, mut observe: impl FnMut(u64, &Pack)) -> Result<SessionTally> {
        let mut tally = SessionTally::new();
        for index in 0..self.config.pack_count as u64 {
            let pack = self.run_pack(index)?;
            debug!(
                pack = index,
                cards_made = pack.cards_made,
                abilities = pack.abilities_made(),
                best = pack.best().map(|c| c.power_rating),
                "pack assembled"
            );
            observe(index, &pack);
            tally.record(&pack);
        }
        debug!(packs = tally.packs, slots = tally.total_slots, "session complete");
        Ok(tally)
    }

    /// Run packs across the rayon pool; same result as [`Self::run_session`].
    ///
    /// Each pack is reduced to its own tally as soon as it is built, and the
    /// tallies merge in index order, so memory stays flat in `pack_count` and
    /// best-card ties still go to the earliest pack.
    pub fn run_session_parallel(&self) -> Result<SessionTally> {
        let tally = (0..self.config.pack_count as u64)
            .into_par_iter()
            .map(|index| {
                self.run_pack(index).map(|pack| {
                    let mut tally = SessionTally::new();
                    tally.record(&pack);
                    tally
                })
            })
            .try_reduce(SessionTally::new, |mut left, right| {
                left.merge(right);
                Ok(left)
            })?;

        debug!(packs = tally.packs, slots = tally.total_slots, "parallel session complete");
        Ok(tally)
    }
}
