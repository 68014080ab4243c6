//! Emitted session summary: per-rarity counts, percentages, and odds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rarity};

/// "1-in-N" odds of a tier, or undefined when it never appeared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Odds {
    OneIn(u64),
    Undefined,
}

impl Odds {
    /// `round(total / count)`, ties to even; `Undefined` for a zero count.
    #[must_use]
    pub fn from_counts(count: u64, total: u64) -> Self {
        if count == 0 {
            return Odds::Undefined;
        }
        Odds::OneIn((total as f64 / count as f64).round_ties_even() as u64)
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Odds::OneIn(n) => write!(f, "1-in-{n}"),
            Odds::Undefined => f.write_str("undefined"),
        }
    }
}

/// One row of the rarity table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RarityLine {
    pub rarity: Rarity,
    pub count: u64,
    /// Share of all tallied slots, in percent.
    pub percentage: f64,
    pub odds: Odds,
}

impl RarityLine {
    #[must_use]
    pub fn new(rarity: Rarity, count: u64, total_slots: u64) -> Self {
        let percentage = if total_slots == 0 {
            0.0
        } else {
            count as f64 / total_slots as f64 * 100.0
        };
        Self {
            rarity,
            count,
            percentage,
            odds: Odds::from_counts(count, total_slots),
        }
    }
}

/// Totals of a generation session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub packs: u64,
    pub cards_made: u64,
    pub abilities_made: u64,
    /// `pack_count * pack_size`.
    pub total_slots: u64,
    /// Lowest tier first.
    pub rarities: Vec<RarityLine>,
    /// Cards with an ability per health value, ascending health.
    pub ability_histogram: Vec<(i64, u64)>,
    pub best_card: Option<Card>,
}

impl SessionSummary {
    /// Abilities per built card, in percent; `None` before any card is built.
    #[must_use]
    pub fn ability_rate(&self) -> Option<f64> {
        (self.cards_made > 0).then(|| self.abilities_made as f64 / self.cards_made as f64 * 100.0)
    }

    #[must_use]
    pub fn line(&self, rarity: Rarity) -> Option<&RarityLine> {
        self.rarities.iter().find(|l| l.rarity == rarity)
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ability_rate() {
            Some(rate) => writeln!(
                f,
                "{} Abilities / {} Cards [{rate:.2}]",
                self.abilities_made, self.cards_made
            )?,
            None => writeln!(f, "{} Abilities / {} Cards", self.abilities_made, self.cards_made)?,
        }
        writeln!(f, "============================")?;
        writeln!(f, "Total: {}", self.total_slots)?;
        for line in &self.rarities {
            writeln!(
                f,
                "{}: {} [{:.2}%] {}",
                line.rarity, line.count, line.percentage, line.odds
            )?;
        }
        if let Some(best) = &self.best_card {
            writeln!(f)?;
            writeln!(f, "Best card: {best}")?;
        }
        Ok(())
    }
}
