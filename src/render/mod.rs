//! Consumers of finished records: card renderers and distribution plotters.
//!
//! The generator never depends on what these produce. They exist so callers
//! can swap the text implementations here for raster or charting backends.

pub mod card_face;
pub mod histogram;

pub use card_face::TextCardRenderer;
pub use histogram::Histogram;

use crate::cards::Card;

/// Turns a finished card into some artifact (text, image bytes, ...).
pub trait CardRenderer {
    type Output;

    fn render(&self, card: &Card) -> Self::Output;
}

/// Observes raw numeric samples. Purely observational; nothing flows back.
pub trait DistributionPlotter {
    fn plot(&mut self, samples: &[f64], title: &str);
}
