//! Game configuration.
//!
//! `GameConfig::default()` reproduces the standard game: a 50×80 map, six
//! players of whom only the first is human, two actions per turn and a
//! 200-month limit. Every constant the rules consult lives here so that
//! tests and variants can adjust them without touching the rules.

use serde::{Deserialize, Serialize};

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Map height in rows.
    pub rows: i32,

    /// Map width in columns.
    pub cols: i32,

    /// Number of players (1-255). One capital is placed per player.
    pub player_count: usize,

    /// Players with id below this are human; the rest are AI.
    pub human_players: usize,

    /// Gold each player starts with.
    pub starting_gold: i64,

    /// Action budget at the start of every turn.
    pub actions_per_turn: u8,

    /// Gold earned per owned city at month end.
    pub city_income: i64,

    /// Gold spent to found a city.
    pub city_cost: i64,

    /// Minimum Euclidean distance between starting capitals.
    pub min_capital_distance: f64,

    /// Capitals are drawn from `[margin, size - margin)` on both axes.
    pub placement_margin: i32,

    /// Draws allowed per capital before initialization fails.
    pub placement_attempts: u32,

    /// Multiplier from grid coordinates to noise coordinates.
    pub terrain_scale: f64,

    /// Probability that an attacking unit beats a defending unit.
    pub unit_combat_odds: f64,

    /// Probability that an attack on a city captures it.
    pub city_attack_odds: f64,

    /// Share of all land cells that wins by domination.
    pub domination_ratio: f64,

    /// Month at which the game ends on territory.
    pub month_limit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 80,
            player_count: 6,
            human_players: 1,
            starting_gold: 20,
            actions_per_turn: 2,
            city_income: 10,
            city_cost: 20,
            min_capital_distance: 10.0,
            placement_margin: 5,
            placement_attempts: 1000,
            terrain_scale: 0.08,
            unit_combat_odds: 0.6,
            city_attack_odds: 0.5,
            domination_ratio: 0.9,
            month_limit: 200,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration for `player_count` players.
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the map size.
    #[must_use]
    pub fn with_map_size(mut self, rows: i32, cols: i32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set how many leading players are human.
    #[must_use]
    pub fn with_human_players(mut self, count: usize) -> Self {
        self.human_players = count;
        self
    }

    /// Set the starting gold.
    #[must_use]
    pub fn with_starting_gold(mut self, gold: i64) -> Self {
        self.starting_gold = gold;
        self
    }

    /// Set combat and city-attack odds.
    #[must_use]
    pub fn with_combat_odds(mut self, unit_combat: f64, city_attack: f64) -> Self {
        self.unit_combat_odds = unit_combat;
        self.city_attack_odds = city_attack;
        self
    }

    /// Set the month limit.
    #[must_use]
    pub fn with_month_limit(mut self, months: u32) -> Self {
        self.month_limit = months;
        self
    }

    /// Whether the given player index is controlled by AI.
    #[must_use]
    pub fn is_ai(&self, player_index: usize) -> bool {
        player_index >= self.human_players
    }
}
