//! Victory evaluation, run once per completed month.
//!
//! Players are checked in id order; for each, domination is checked before
//! elimination and the first condition to fire decides the game. The turn
//! limit is only consulted when no player triggered either.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{GameConfig, GameState, PlayerId};
use crate::map::WorldMap;

/// How the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryKind {
    /// A player owns at least the domination share of all land.
    Domination,
    /// No other player holds a city.
    Elimination,
    /// The month limit was reached.
    TurnLimit,
}

/// A fired victory condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Victory {
    /// Which condition fired.
    pub kind: VictoryKind,
    /// The winner. Only a turn limit with no land owned leaves this empty.
    pub winner: Option<PlayerId>,
}

impl Victory {
    /// Collapse to a result.
    #[must_use]
    pub fn result(&self) -> GameResult {
        match self.winner {
            Some(player) => GameResult::Winner(player),
            None => GameResult::Draw,
        }
    }
}

/// Game result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Check every victory condition against the current state.
#[must_use]
pub fn evaluate(state: &GameState, world: &WorldMap, config: &GameConfig) -> Option<Victory> {
    let threshold = config.domination_ratio * world.land_cell_count() as f64;

    for (id, player) in state.players.iter() {
        if player.owned_land_cells(world) as f64 >= threshold {
            return Some(Victory {
                kind: VictoryKind::Domination,
                winner: Some(id),
            });
        }

        let others_hold_cities = state
            .players
            .iter()
            .any(|(other, p)| other != id && !p.cities.is_empty());
        if !others_hold_cities {
            return Some(Victory {
                kind: VictoryKind::Elimination,
                winner: Some(id),
            });
        }
    }

    if state.current_month >= config.month_limit {
        // Strictly greater, so the first of a tie keeps the lead and all
        // zeros leaves no winner.
        let mut best = 0;
        let mut winner = None;
        for (id, player) in state.players.iter() {
            let land = player.owned_land_cells(world);
            if land > best {
                best = land;
                winner = Some(id);
            }
        }
        return Some(Victory {
            kind: VictoryKind::TurnLimit,
            winner,
        });
    }

    None
}

/// End the game with the given victory.
pub fn declare(state: &mut GameState, victory: Victory) {
    state.game_over = true;
    state.winner = victory.winner;
    state.victory = Some(victory);
    info!(kind = ?victory.kind, winner = ?victory.winner, month = state.current_month, "game over");
}
