//! The static world: grid geometry plus terrain.
//!
//! `WorldMap` is built once per game and shared by every rule that asks
//! whether a cell is land. There is one terrain policy for both play and
//! display: a cell is land iff it is on the grid and its noise is positive.
//! There is no forced water border.

mod hex;
mod placement;
mod terrain;

pub use hex::{HexGrid, Neighbors};
pub use placement::find_starting_positions;
pub use terrain::TerrainField;

use crate::core::{GameConfig, Position};

/// Grid and terrain of one game.
#[derive(Clone, Debug)]
pub struct WorldMap {
    grid: HexGrid,
    terrain: TerrainField,
    land_cells: usize,
}

impl WorldMap {
    /// Build the world for a config and game seed.
    #[must_use]
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let grid = HexGrid::new(config.rows, config.cols);
        let terrain = TerrainField::from_game_seed(seed, config.terrain_scale);
        Self::from_parts(grid, terrain)
    }

    /// Build a world from an explicit grid and terrain.
    #[must_use]
    pub fn from_parts(grid: HexGrid, terrain: TerrainField) -> Self {
        let land_cells = grid.cells().filter(|&p| terrain.is_land(p)).count();
        Self {
            grid,
            terrain,
            land_cells,
        }
    }

    /// The grid.
    #[must_use]
    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    /// The terrain field.
    #[must_use]
    pub fn terrain(&self) -> &TerrainField {
        &self.terrain
    }

    /// Whether a position lies on the map.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.grid.contains(position)
    }

    /// Land/water predicate. Off-grid positions are water.
    #[must_use]
    pub fn is_land(&self, position: Position) -> bool {
        self.grid.contains(position) && self.terrain.is_land(position)
    }

    /// Absolute noise of a cell, used as the cost of expanding into it.
    #[must_use]
    pub fn expansion_cost(&self, position: Position) -> f64 {
        self.terrain.sample(position).abs()
    }

    /// Number of land cells on the map.
    #[must_use]
    pub fn land_cell_count(&self) -> usize {
        self.land_cells
    }

    /// Whether a cell borders a cell of the other terrain kind.
    #[must_use]
    pub fn is_coast(&self, position: Position) -> bool {
        let land = self.is_land(position);
        self.grid
            .neighbors(position)
            .iter()
            .any(|&n| self.is_land(n) != land)
    }
}
