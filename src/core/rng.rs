//! Deterministic random number generation with scoped sub-streams.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Sub-streams**: Per-card rolls come from a separate generator that
//!   borrows the ambient one for its whole scope
//! - **Per-pack streams**: Each pack of a session draws from its own stream,
//!   so packs can run in any order (or in parallel) with identical results
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use card_forge::core::CardRng;
//!
//! let mut rng = CardRng::new(42);
//! let before = rng.state();
//!
//! // Derived rolls never touch the ambient position.
//! let roll = rng.with_substream(80, |sub| sub.gen_f64());
//! assert!((0.0..1.0).contains(&roll));
//! assert_eq!(rng.state(), before);
//! ```

use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Golden-ratio increment used to spread pack indices across seeds.
const PACK_SEED_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic RNG handle threaded through every sampling call.
///
/// Uses ChaCha8 for speed while keeping well-mixed output.
#[derive(Clone, Debug)]
pub struct CardRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl CardRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the stream used by pack `index` of a session seeded with `seed`.
    ///
    /// Depends only on `(seed, index)`, never on how many packs ran before.
    #[must_use]
    pub fn for_pack(seed: u64, index: u64) -> Self {
        Self::new(seed.wrapping_add(index.wrapping_add(1).wrapping_mul(PACK_SEED_STEP)))
    }

    /// Run `f` against an isolated stream seeded with `seed`.
    ///
    /// The ambient generator is mutably borrowed for the duration of the
    /// call, so nothing inside the scope can advance it.
    pub fn with_substream<T>(&mut self, seed: u64, f: impl FnOnce(&mut CardRng) -> T) -> T {
        let mut sub = CardRng::new(seed);
        f(&mut sub)
    }

    /// Generate a random integer in the given inclusive range.
    pub fn gen_range_inclusive(&mut self, range: std::ops::RangeInclusive<i64>) -> i64 {
        self.inner.gen_range(range)
    }

    /// Uniform draw in `[0, 1)`.
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform draw in `[low, high)`, computed as `low + (high - low) * u`.
    ///
    /// Never panics; `low == high` returns `low`.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.gen_f64()
    }

    /// Sample from any `rand` distribution using this stream.
    pub fn sample<T, D: Distribution<T>>(&mut self, distribution: &D) -> T {
        distribution.sample(&mut self.inner)
    }

    /// Choose `amount` distinct indices from `0..len`, in draw order.
    ///
    /// Returns `None` if `amount > len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Option<Vec<usize>> {
        if amount > len {
            return None;
        }
        Some(rand::seq::index::sample(&mut self.inner, len, amount).into_vec())
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> CardRngState {
        CardRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &CardRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
