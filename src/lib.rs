//! # hex-dominion
//!
//! A deterministic game-state engine for turn-based territorial strategy
//! on an offset hex grid.
//!
//! ## Design Principles
//!
//! 1. **Seeded World**: Terrain comes from a seeded noise field and capital
//!    placement from a seeded RNG stream. Same seed, same world.
//!
//! 2. **Validate, Then Mutate**: Every action is fully validated before any
//!    state changes. A rejected action leaves the state untouched.
//!
//! 3. **Injectable Chance**: Combat and city attacks roll through the
//!    `RandomSource` trait so callers can script outcomes.
//!
//! ## Modules
//!
//! - `core`: Ids, positions, players, units, cities, actions, RNG, configuration, state
//! - `map`: Hex grid geometry, terrain noise, capital placement
//! - `rules`: Action engine, turn scheduler, victory evaluation
//! - `game`: Query/command facade and turn controllers
//! - `error`: Initialization and action errors

pub mod core;
pub mod error;
pub mod game;
pub mod map;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionOutcome, ActionRecord,
    City, CityId, EntityAllocator, Unit, UnitId, UnitStats, UnitType,
    GameConfig, GameRng, GameRngState, RandomSource,
    GameState, Player, PlayerId, PlayerMap, Position,
};

pub use crate::error::{ActionError, Actor, InitError};

pub use crate::game::{Controller, Game, PassiveController};

pub use crate::map::{find_starting_positions, HexGrid, TerrainField, WorldMap};

pub use crate::rules::{GameResult, TurnAdvance, Victory, VictoryKind};
