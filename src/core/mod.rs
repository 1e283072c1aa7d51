//! Core engine types: ids, positions, players, entities, actions, RNG, configuration, state.
//!
//! Everything here is plain data plus small helpers. The rules that mutate
//! it live in `rules`.

pub mod action;
pub mod config;
pub mod entity;
pub mod player;
pub mod position;
pub mod rng;
pub mod state;

pub use action::{Action, ActionOutcome, ActionRecord};
pub use config::GameConfig;
pub use entity::{City, CityId, EntityAllocator, Unit, UnitId, UnitStats, UnitType};
pub use player::{Player, PlayerId, PlayerMap};
pub use position::Position;
pub use rng::{GameRng, GameRngState, RandomSource};
pub use state::GameState;
