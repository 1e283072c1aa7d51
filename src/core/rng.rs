//! Seeded randomness and the injectable chance seam.
//!
//! A game seed feeds two things: the terrain noise (see `map::terrain`) and
//! a `GameRng`. The RNG is split into named streams so that capital
//! placement and combat never disturb each other's sequence.
//!
//! ```
//! use hex_dominion::{GameRng, RandomSource};
//!
//! let root = GameRng::new(42);
//! let mut placement = root.for_context("placement");
//! let mut combat = root.for_context("combat");
//!
//! let row = placement.gen_range(5..45);
//! assert!((5..45).contains(&row));
//! assert!(combat.roll(1.0));
//! ```

use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of chance for combat and city attacks.
///
/// The rules draw combat randomness from nowhere else, so tests can script
/// outcomes with their own implementation.
pub trait RandomSource {
    /// Return true with the given probability.
    fn roll(&mut self, probability: f64) -> bool;
}

/// ChaCha8 stream with a known seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a stream from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Derive the stream named `context` from this RNG's seed.
    ///
    /// Depends only on the seed and the name, never on how much of this
    /// stream has been consumed. The name is mixed in with std's
    /// `DefaultHasher`, whose output is only stable within one Rust
    /// toolchain, so derived streams (and capital placement) can differ
    /// between builds made with different compilers.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// The seed this stream started from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `range`.
    pub fn gen_range(&mut self, range: std::ops::Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// True with `probability`, clamped to `[0, 1]`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Capture the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream captured with [`GameRng::state`].
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.inner.set_word_pos(state.word_pos);
        rng
    }
}

impl RandomSource for GameRng {
    fn roll(&mut self, probability: f64) -> bool {
        self.gen_bool(probability)
    }
}

/// Saved position of a `GameRng`, for checkpointing a game's combat stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Stream seed.
    pub seed: u64,
    /// ChaCha8 word position.
    pub word_pos: u128,
}
