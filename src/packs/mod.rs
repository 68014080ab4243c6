//! Pack assembly and multi-pack rarity simulation.
//!
//! ## Key Types
//!
//! - `Pack`: Weakest card, random interior picks, strongest card
//! - `SessionTally`: Running rarity counters across packs
//! - `Simulator`: Runs packs and sessions for a validated config
//! - `SessionSummary`: Per-rarity counts, percentages, and odds

pub mod pack;
pub mod session;
pub mod summary;

pub use pack::{build_pool, run_pack, Pack, PackSlots};
pub use session::{SessionTally, Simulator};
pub use summary::{Odds, RarityLine, SessionSummary};
