//! Game state: the mutable world.
//!
//! ## GameState
//!
//! - Players with their gold, cities, units and territory
//! - Month counter and turn pointer
//! - Per-turn action budget
//! - Terminal flag, winner and how the game was won
//! - Action history
//!
//! The state knows nothing about terrain. Rules that need land/water take a
//! `WorldMap` alongside it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::GameConfig;
use super::entity::{City, CityId, EntityAllocator, Unit, UnitId, UnitType};
use super::player::{Player, PlayerId, PlayerMap};
use super::position::Position;
use crate::rules::Victory;

/// Complete game state.
///
/// Uses `im` persistent structures for territory and history so that
/// cloning a state for look-ahead stays cheap.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// All players, indexed by id.
    pub players: PlayerMap<Player>,

    /// Completed rounds (starts at 0).
    pub current_month: u32,

    /// Player whose turn it is.
    pub current_player: PlayerId,

    /// Actions left in the current turn.
    pub actions_remaining: u8,

    /// Set once a victory condition fires. Terminal.
    pub game_over: bool,

    /// Winner, if the game ended with one.
    pub winner: Option<PlayerId>,

    /// How the game ended.
    pub victory: Option<Victory>,

    /// Action sequence within the current turn.
    pub action_sequence: u32,

    /// Every executed action, oldest first.
    pub action_history: Vector<ActionRecord>,

    entities: EntityAllocator,
}

impl GameState {
    /// Create the opening position.
    ///
    /// Player `i` gets a capital at `capitals[i]`, an explorer standing on
    /// it, the capital cell as territory and the starting gold.
    #[must_use]
    pub fn new(config: &GameConfig, capitals: &[Position]) -> Self {
        assert_eq!(
            capitals.len(),
            config.player_count,
            "Need exactly one capital per player"
        );

        let mut entities = EntityAllocator::new();
        let mut players = PlayerMap::new(config.player_count, |id| {
            Player::new(id, config.is_ai(id.index()), config.starting_gold)
        });

        for (id, player) in players.iter_mut() {
            let position = capitals[id.index()];
            player.cities.push(City::new(entities.next_city(), position, id, true));
            player.units.push(Unit::new(entities.next_unit(), UnitType::Explorer, position, id));
            player.claim(position);
        }

        Self {
            players,
            current_month: 0,
            current_player: PlayerId::new(0),
            actions_remaining: config.actions_per_turn,
            game_over: false,
            winner: None,
            victory: None,
            action_sequence: 0,
            action_history: Vector::new(),
            entities,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    // === Entity Management ===

    /// Allocate a fresh unit id.
    pub fn alloc_unit_id(&mut self) -> UnitId {
        self.entities.next_unit()
    }

    /// Allocate a fresh city id.
    pub fn alloc_city_id(&mut self) -> CityId {
        self.entities.next_city()
    }

    // === Lookups ===

    /// First unit on a cell, scanning players in id order.
    #[must_use]
    pub fn unit_at(&self, position: Position) -> Option<&Unit> {
        self.players
            .values()
            .flat_map(|p| p.units.iter())
            .find(|u| u.position == position)
    }

    /// City on a cell, if any.
    #[must_use]
    pub fn city_at(&self, position: Position) -> Option<&City> {
        self.players
            .values()
            .flat_map(|p| p.cities.iter())
            .find(|c| c.position == position)
    }

    /// First unit on a cell that does not belong to `player`.
    #[must_use]
    pub fn enemy_unit_at(&self, position: Position, player: PlayerId) -> Option<&Unit> {
        self.players
            .iter()
            .filter(|(id, _)| *id != player)
            .flat_map(|(_, p)| p.units.iter())
            .find(|u| u.position == position)
    }

    /// City on a cell that does not belong to `player`.
    #[must_use]
    pub fn enemy_city_at(&self, position: Position, player: PlayerId) -> Option<&City> {
        self.players
            .iter()
            .filter(|(id, _)| *id != player)
            .flat_map(|(_, p)| p.cities.iter())
            .find(|c| c.position == position)
    }

    /// Find a unit anywhere on the map.
    #[must_use]
    pub fn find_unit(&self, id: UnitId) -> Option<&Unit> {
        self.players.values().find_map(|p| p.unit(id))
    }

    /// Whether any player owns the cell.
    #[must_use]
    pub fn is_cell_owned(&self, position: Position) -> bool {
        self.players.values().any(|p| p.owns_cell(position))
    }

    /// Owner of a cell, first match in id order.
    #[must_use]
    pub fn cell_owner(&self, position: Position) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.owns_cell(position))
            .map(|(id, _)| id)
    }

    // === Action History ===

    /// Record an action in history.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.action_history.push_back(record);
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }
}
