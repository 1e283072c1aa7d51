//! Offset hex grid geometry.
//!
//! Rows are horizontal strips of pointy-top hexes; odd rows are shifted
//! half a cell to the right, so the diagonal neighbours depend on row
//! parity.

use smallvec::SmallVec;

use crate::core::Position;

/// Offsets present for every row: above, below, left, right.
const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal offsets for even rows.
const EVEN_ROW_DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 0), (1, -1), (1, 0)];

/// Diagonal offsets for odd rows.
const ODD_ROW_DIAGONALS: [(i32, i32); 4] = [(-1, 0), (-1, 1), (1, 0), (1, 1)];

/// Neighbour list of one cell. Never more than eight entries.
pub type Neighbors = SmallVec<[Position; 8]>;

/// Bounds and adjacency of a `rows × cols` offset grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexGrid {
    rows: i32,
    cols: i32,
}

impl HexGrid {
    /// Create a grid.
    #[must_use]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        (self.rows.max(0) as usize) * (self.cols.max(0) as usize)
    }

    /// Whether a position lies on the grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.row >= 0 && position.row < self.rows && position.col >= 0 && position.col < self.cols
    }

    /// In-bounds neighbours of a cell.
    ///
    /// The orthogonal four come first, then the parity-dependent diagonals.
    /// The diagonal sets repeat the straight-up and straight-down offsets,
    /// so those two cells appear twice. Territorial expansion scans this
    /// list as-is, duplicates included.
    #[must_use]
    pub fn neighbors(&self, position: Position) -> Neighbors {
        let diagonals = if position.is_even_row() {
            &EVEN_ROW_DIAGONALS
        } else {
            &ODD_ROW_DIAGONALS
        };

        ORTHOGONAL
            .iter()
            .chain(diagonals.iter())
            .map(|&(d_row, d_col)| position.offset(d_row, d_col))
            .filter(|&p| self.contains(p))
            .collect()
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// In-bounds cells within the square of half-width `radius` around a
    /// centre, row-major.
    pub fn cells_around(&self, centre: Position, radius: i32) -> impl Iterator<Item = Position> + '_ {
        let rows = (centre.row - radius).max(0)..(centre.row + radius + 1).min(self.rows);
        rows.flat_map(move |row| {
            let cols = (centre.col - radius).max(0)..(centre.col + radius + 1).min(self.cols);
            cols.map(move |col| Position::new(row, col))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let grid = HexGrid::new(50, 80);

        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(49, 79)));
        assert!(!grid.contains(Position::new(50, 0)));
        assert!(!grid.contains(Position::new(0, 80)));
        assert!(!grid.contains(Position::new(-1, 5)));
        assert_eq!(grid.cell_count(), 4000);
    }

    #[test]
    fn test_even_row_neighbors() {
        let grid = HexGrid::new(50, 80);
        let n = grid.neighbors(Position::new(10, 10));

        assert_eq!(
            n.as_slice(),
            &[
                Position::new(9, 10),
                Position::new(11, 10),
                Position::new(10, 9),
                Position::new(10, 11),
                Position::new(9, 9),
                Position::new(9, 10),
                Position::new(11, 9),
                Position::new(11, 10),
            ]
        );
    }

    #[test]
    fn test_odd_row_neighbors() {
        let grid = HexGrid::new(50, 80);
        let n = grid.neighbors(Position::new(11, 10));

        assert_eq!(
            n.as_slice(),
            &[
                Position::new(10, 10),
                Position::new(12, 10),
                Position::new(11, 9),
                Position::new(11, 11),
                Position::new(10, 10),
                Position::new(10, 11),
                Position::new(12, 10),
                Position::new(12, 11),
            ]
        );
    }

    #[test]
    fn test_vertical_neighbors_are_duplicated() {
        let grid = HexGrid::new(50, 80);
        let centre = Position::new(20, 20);
        let n = grid.neighbors(centre);

        let above = n.iter().filter(|&&p| p == centre.offset(-1, 0)).count();
        let below = n.iter().filter(|&&p| p == centre.offset(1, 0)).count();
        assert_eq!(above, 2);
        assert_eq!(below, 2);
    }

    #[test]
    fn test_corner_neighbors_are_clipped() {
        let grid = HexGrid::new(50, 80);
        let n = grid.neighbors(Position::new(0, 0));

        assert!(n.iter().all(|&p| grid.contains(p)));
        // below twice, right once
        assert_eq!(n.len(), 3);
    }

    #[test]
    fn test_cells_row_major() {
        let grid = HexGrid::new(2, 3);
        let cells: Vec<_> = grid.cells().collect();

        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Position::new(0, 0));
        assert_eq!(cells[3], Position::new(1, 0));
        assert_eq!(cells[5], Position::new(1, 2));
    }

    #[test]
    fn test_cells_around_clips_to_grid() {
        let grid = HexGrid::new(10, 10);

        assert_eq!(grid.cells_around(Position::new(5, 5), 2).count(), 25);
        assert_eq!(grid.cells_around(Position::new(0, 0), 2).count(), 9);
        assert!(grid.cells_around(Position::new(9, 9), 1).all(|p| grid.contains(p)));
    }
}
