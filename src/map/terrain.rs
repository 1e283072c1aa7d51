//! Seeded terrain noise.
//!
//! A `TerrainField` is a pure function of its seed: the same seed answers
//! every query identically, for as long as the field lives. Nothing is
//! cached per cell.
//!
//! ```
//! use hex_dominion::{Position, TerrainField};
//!
//! let a = TerrainField::new(42, 0.08);
//! let b = TerrainField::new(42, 0.08);
//!
//! let cell = Position::new(12, 30);
//! assert_eq!(a.sample(cell), b.sample(cell));
//! assert_eq!(a.is_land(cell), a.sample(cell) > 0.0);
//! ```

use noise::{NoiseFn, Simplex};

use crate::core::Position;

/// Deterministic 2D gradient noise classifying cells as land or water.
#[derive(Clone)]
pub struct TerrainField {
    seed: u32,
    scale: f64,
    simplex: Simplex,
}

impl TerrainField {
    /// Create a field from a seed and a grid-to-noise scale.
    #[must_use]
    pub fn new(seed: u32, scale: f64) -> Self {
        Self {
            seed,
            scale,
            simplex: Simplex::new(seed),
        }
    }

    /// Create a field from a full game seed, using its low 32 bits.
    #[must_use]
    pub fn from_game_seed(seed: u64, scale: f64) -> Self {
        Self::new(seed as u32, scale)
    }

    /// The noise seed.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Raw noise at continuous coordinates, roughly in `[-1, 1]`.
    #[must_use]
    pub fn noise(&self, x: f64, y: f64) -> f64 {
        self.simplex.get([x, y])
    }

    /// Noise value of a cell: `noise(col · scale, row · scale)`.
    #[must_use]
    pub fn sample(&self, position: Position) -> f64 {
        self.noise(f64::from(position.col) * self.scale, f64::from(position.row) * self.scale)
    }

    /// Whether a cell is land (noise strictly above zero).
    #[must_use]
    pub fn is_land(&self, position: Position) -> bool {
        self.sample(position) > 0.0
    }
}

impl std::fmt::Debug for TerrainField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerrainField")
            .field("seed", &self.seed)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}
