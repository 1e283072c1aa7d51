//! Error types.
//!
//! `InitError` aborts game creation. `ActionError` explains why an action
//! was rejected; at the command boundary it collapses to `false`.

use thiserror::Error;

use crate::core::{CityId, PlayerId, Position, UnitId, UnitType};

/// The thing an action named that could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// The acting player does not exist.
    Player(PlayerId),
    /// The acting player has no such unit.
    Unit(UnitId),
    /// The acting player has no such city.
    City(CityId),
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Actor::Player(id) => write!(f, "{id}"),
            Actor::Unit(id) => write!(f, "{id}"),
            Actor::City(id) => write!(f, "{id}"),
        }
    }
}

/// Why an action was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    /// The player, unit or city does not exist or is not the actor's.
    #[error("{0} not found for the acting player")]
    ActorNotFound(Actor),

    /// The turn's action budget is spent.
    #[error("no actions remaining this turn")]
    NoActionsRemaining,

    /// The unit already moved this turn.
    #[error("{0} has already moved this turn")]
    AlreadyMoved(UnitId),

    /// The target is further than the unit's move range.
    #[error("{unit} cannot reach {target}: distance {distance:.2} exceeds range {range}")]
    OutOfRange {
        /// The moving unit.
        unit: UnitId,
        /// Requested destination.
        target: Position,
        /// Euclidean distance to the destination.
        distance: f64,
        /// The unit's move range.
        range: u32,
    },

    /// Land unit onto water, naval unit onto land, or a city on water.
    #[error("{unit_type} cannot be placed on {target}")]
    TerrainMismatch {
        /// The unit type involved.
        unit_type: UnitType,
        /// The offending cell.
        target: Position,
    },

    /// Not enough gold.
    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds {
        /// Gold required.
        needed: i64,
        /// Gold held.
        available: i64,
    },

    /// The target cell is off the map.
    #[error("invalid target {0}")]
    InvalidTarget(Position),

    /// A city cannot be founded on territory someone already owns.
    #[error("cell {0} is already owned")]
    CellAlreadyOwned(Position),

    /// The unit type cannot perform this action.
    #[error("{unit} is a {unit_type} and cannot {attempted}")]
    WrongUnitType {
        /// The unit involved.
        unit: UnitId,
        /// Its type.
        unit_type: UnitType,
        /// What it tried to do.
        attempted: &'static str,
    },
}

/// Why a game could not be created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    /// A capital could not be placed within the attempt budget.
    #[error("could not place capital {} of {required} within {attempts} attempts", .placed + 1)]
    PlacementExhausted {
        /// Capitals placed before giving up.
        placed: usize,
        /// Capitals needed.
        required: usize,
        /// Attempts allowed per capital.
        attempts: u32,
    },

    /// The placement margin leaves no interior to draw capitals from.
    #[error("a {rows}x{cols} map has no interior inside a margin of {margin}")]
    MapTooSmall {
        /// Map rows.
        rows: i32,
        /// Map columns.
        cols: i32,
        /// Placement margin.
        margin: i32,
    },
}
