//! Turn and month progression.
//!
//! A month is one full round: every player takes a turn, and when the turn
//! pointer wraps back to player 0 the month ends. Month end pays income,
//! grows every city by at most one cell and then checks for victory.

use tracing::{debug, info};

use super::victory::{self, Victory};
use crate::core::{GameConfig, GameState, PlayerId, Position};
use crate::map::WorldMap;

/// What `end_turn` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnAdvance {
    /// The player whose turn ended.
    pub previous: PlayerId,
    /// The player whose turn begins.
    pub current: PlayerId,
    /// Whether the round completed and month end ran.
    pub month_ended: bool,
    /// Victory declared by this month end, if any.
    pub victory: Option<Victory>,
}

/// End the current player's turn.
///
/// Refreshes the outgoing player's units, hands the turn to the next
/// player and resets the action budget. Wrapping to player 0 runs
/// [`process_month_end`].
pub fn end_turn(state: &mut GameState, world: &WorldMap, config: &GameConfig) -> TurnAdvance {
    let previous = state.current_player;
    state.players[previous].refresh_units();

    let current = previous.next(state.player_count());
    state.current_player = current;

    let (month_ended, victory) = if current.index() == 0 {
        (true, process_month_end(state, world, config))
    } else {
        (false, None)
    };

    state.actions_remaining = config.actions_per_turn;
    state.action_sequence = 0;

    TurnAdvance {
        previous,
        current,
        month_ended,
        victory,
    }
}

/// Close a month: income, expansion, then victory.
///
/// Players are processed in id order. Each is paid for the cities it holds,
/// then each of its cities claims its cheapest free land neighbour.
pub fn process_month_end(state: &mut GameState, world: &WorldMap, config: &GameConfig) -> Option<Victory> {
    state.current_month += 1;

    for id in state.players.player_ids().collect::<Vec<_>>() {
        let income = config.city_income * state.players[id].cities.len() as i64;
        state.players[id].gold += income;

        let sites: Vec<Position> = state.players[id].cities.iter().map(|c| c.position).collect();
        let mut claimed = 0;
        for site in sites {
            if let Some(cell) = find_expansion(state, world, site) {
                state.players[id].claim(cell);
                claimed += 1;
                debug!(player = %id, city = %site, %cell, "territory expanded");
            }
        }

        debug!(player = %id, income, claimed, gold = state.players[id].gold, "month end");
    }

    info!(month = state.current_month, "month ended");

    let victory = victory::evaluate(state, world, config);
    if let Some(v) = victory {
        victory::declare(state, v);
    }
    victory
}

/// The cheapest cell a city at `site` can expand into.
///
/// Candidates are its neighbours that are land and owned by nobody. Cost is
/// the absolute noise value; on equal cost the earliest neighbour wins.
#[must_use]
pub fn find_expansion(state: &GameState, world: &WorldMap, site: Position) -> Option<Position> {
    let mut best: Option<(Position, f64)> = None;

    for &cell in &world.grid().neighbors(site) {
        if !world.is_land(cell) || state.is_cell_owned(cell) {
            continue;
        }
        let cost = world.expansion_cost(cell);
        if best.map_or(true, |(_, lowest)| cost < lowest) {
            best = Some((cell, cost));
        }
    }

    best.map(|(cell, _)| cell)
}
