//! Grid positions in offset hex coordinates.
//!
//! A `Position` is a plain `(row, col)` pair. Whether it lies on the map is
//! a question for `HexGrid::contains`; positions outside the grid are still
//! representable so that neighbour offsets can be computed before filtering.

use serde::{Deserialize, Serialize};

/// A cell on the map in offset coordinates.
///
/// Ordering is row-major, so sorted collections of positions iterate the
/// map top to bottom, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index (0 at the top).
    pub row: i32,
    /// Column index (0 at the left).
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset this position by a row and column delta.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Euclidean distance on `(row, col)`.
    ///
    /// Range and spacing checks use this rather than hex-step distance.
    ///
    /// ```
    /// use hex_dominion::Position;
    ///
    /// assert_eq!(Position::new(0, 0).distance(Position::new(3, 4)), 5.0);
    /// ```
    #[must_use]
    pub fn distance(self, other: Position) -> f64 {
        let d_row = f64::from(self.row - other.row);
        let d_col = f64::from(self.col - other.col);
        (d_row * d_row + d_col * d_col).sqrt()
    }

    /// Whether this position sits on an even row.
    #[must_use]
    pub const fn is_even_row(self) -> bool {
        self.row.rem_euclid(2) == 0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
