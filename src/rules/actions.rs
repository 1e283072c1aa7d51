//! Action validation and execution.
//!
//! Every action passes through `plan`, which checks all preconditions and
//! resolves what the action will touch. Only a complete plan is applied, so
//! a rejected action leaves the state exactly as it was.
//!
//! Shared preconditions: the acting player exists and has actions left.
//! Each successful action spends one action, whatever the dice say.

use tracing::debug;

use crate::core::{
    Action, ActionOutcome, ActionRecord, City, CityId, GameConfig, GameState, Player, PlayerId,
    Position, RandomSource, Unit, UnitId, UnitType,
};
use crate::error::{ActionError, Actor};
use crate::map::WorldMap;

/// A fully validated action.
#[derive(Clone, Copy, Debug)]
enum Plan {
    Move {
        unit: UnitId,
        target: Position,
        encounter: Encounter,
    },
    Produce {
        position: Position,
        unit_type: UnitType,
        cost: i64,
    },
    Found {
        explorer: UnitId,
        position: Position,
        cost: i64,
    },
}

/// What a moving unit finds on its target cell.
#[derive(Clone, Copy, Debug)]
enum Encounter {
    Empty,
    Unit { owner: PlayerId, unit: UnitId },
    City { owner: PlayerId, city: CityId },
}

/// Check whether `player` may take `action` right now.
pub fn validate(
    state: &GameState,
    world: &WorldMap,
    config: &GameConfig,
    player: PlayerId,
    action: &Action,
) -> Result<(), ActionError> {
    plan(state, world, config, player, action).map(|_| ())
}

/// Validate and apply an action.
///
/// Combat and city attacks draw from `rng`. On success one action is
/// spent and the action is appended to the history.
pub fn execute<R: RandomSource + ?Sized>(
    state: &mut GameState,
    world: &WorldMap,
    config: &GameConfig,
    rng: &mut R,
    player: PlayerId,
    action: &Action,
) -> Result<ActionOutcome, ActionError> {
    let plan = plan(state, world, config, player, action).map_err(|err| {
        debug!(%player, action = action.name(), %err, "action rejected");
        err
    })?;

    let outcome = match plan {
        Plan::Move { unit, target, encounter } => {
            resolve_move(state, config, rng, player, unit, target, encounter)
        }
        Plan::Produce { position, unit_type, cost } => {
            let id = state.alloc_unit_id();
            let actor = &mut state.players[player];
            actor.gold -= cost;
            actor.units.push(Unit::new(id, unit_type, position, player));
            ActionOutcome::UnitProduced(id)
        }
        Plan::Found { explorer, position, cost } => {
            let id = state.alloc_city_id();
            let actor = &mut state.players[player];
            actor.gold -= cost;
            actor.cities.push(City::new(id, position, player, false));
            actor.claim(position);
            actor.remove_unit(explorer);
            ActionOutcome::CityFounded(id)
        }
    };

    state.actions_remaining = state.actions_remaining.saturating_sub(1);
    let sequence = state.next_sequence();
    let month = state.current_month;
    state.record_action(ActionRecord::new(player, *action, outcome, month, sequence));

    debug!(%player, action = action.name(), ?outcome, remaining = state.actions_remaining, "action executed");
    Ok(outcome)
}

fn plan(
    state: &GameState,
    world: &WorldMap,
    config: &GameConfig,
    player: PlayerId,
    action: &Action,
) -> Result<Plan, ActionError> {
    let actor = state
        .players
        .try_get(player)
        .ok_or(ActionError::ActorNotFound(Actor::Player(player)))?;
    if state.actions_remaining == 0 {
        return Err(ActionError::NoActionsRemaining);
    }

    match *action {
        Action::MoveUnit { unit, target } => plan_move(state, world, actor, unit, target),
        Action::ProduceUnit { city, unit_type } => plan_produce(actor, city, unit_type),
        Action::FoundCity { explorer } => plan_found(state, world, config, actor, explorer),
    }
}

fn plan_move(
    state: &GameState,
    world: &WorldMap,
    actor: &Player,
    unit: UnitId,
    target: Position,
) -> Result<Plan, ActionError> {
    let mover = actor
        .unit(unit)
        .ok_or(ActionError::ActorNotFound(Actor::Unit(unit)))?;
    if mover.has_moved {
        return Err(ActionError::AlreadyMoved(unit));
    }
    if !world.contains(target) {
        return Err(ActionError::InvalidTarget(target));
    }

    let stats = mover.unit_type.stats();
    let distance = mover.position.distance(target);
    if distance > f64::from(stats.move_range) {
        return Err(ActionError::OutOfRange {
            unit,
            target,
            distance,
            range: stats.move_range,
        });
    }
    if stats.is_naval == world.is_land(target) {
        return Err(ActionError::TerrainMismatch {
            unit_type: mover.unit_type,
            target,
        });
    }

    // Enemy units are fought before enemy cities are considered
    let encounter = if let Some(defender) = state.enemy_unit_at(target, actor.id) {
        Encounter::Unit {
            owner: defender.owner,
            unit: defender.id,
        }
    } else if let Some(city) = state.enemy_city_at(target, actor.id) {
        if !mover.unit_type.can_attack_cities() {
            return Err(ActionError::WrongUnitType {
                unit,
                unit_type: mover.unit_type,
                attempted: "attack a city",
            });
        }
        Encounter::City {
            owner: city.owner,
            city: city.id,
        }
    } else {
        Encounter::Empty
    };

    Ok(Plan::Move { unit, target, encounter })
}

fn plan_produce(actor: &Player, city: CityId, unit_type: UnitType) -> Result<Plan, ActionError> {
    let producer = actor
        .city(city)
        .ok_or(ActionError::ActorNotFound(Actor::City(city)))?;

    let cost = unit_type.cost();
    if actor.gold < cost {
        return Err(ActionError::InsufficientFunds {
            needed: cost,
            available: actor.gold,
        });
    }

    Ok(Plan::Produce {
        position: producer.position,
        unit_type,
        cost,
    })
}

fn plan_found(
    state: &GameState,
    world: &WorldMap,
    config: &GameConfig,
    actor: &Player,
    explorer: UnitId,
) -> Result<Plan, ActionError> {
    let settler = actor
        .unit(explorer)
        .ok_or(ActionError::ActorNotFound(Actor::Unit(explorer)))?;
    if settler.unit_type != UnitType::Explorer {
        return Err(ActionError::WrongUnitType {
            unit: explorer,
            unit_type: settler.unit_type,
            attempted: "found a city",
        });
    }
    if actor.gold < config.city_cost {
        return Err(ActionError::InsufficientFunds {
            needed: config.city_cost,
            available: actor.gold,
        });
    }

    let position = settler.position;
    if !world.is_land(position) {
        return Err(ActionError::TerrainMismatch {
            unit_type: settler.unit_type,
            target: position,
        });
    }
    if state.is_cell_owned(position) {
        return Err(ActionError::CellAlreadyOwned(position));
    }

    Ok(Plan::Found {
        explorer,
        position,
        cost: config.city_cost,
    })
}

fn resolve_move<R: RandomSource + ?Sized>(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut R,
    player: PlayerId,
    unit: UnitId,
    target: Position,
    encounter: Encounter,
) -> ActionOutcome {
    match encounter {
        Encounter::Empty => {
            relocate(state, player, unit, target);
            ActionOutcome::Moved
        }
        Encounter::Unit { owner, unit: defender } => {
            if rng.roll(config.unit_combat_odds) {
                state.players[owner].remove_unit(defender);
                relocate(state, player, unit, target);
                ActionOutcome::CombatWon { defender }
            } else {
                state.players[player].remove_unit(unit);
                ActionOutcome::CombatLost { defender }
            }
        }
        Encounter::City { owner, city } => {
            if rng.roll(config.city_attack_odds) {
                let cells = capture_city(state, player, owner, city);
                relocate(state, player, unit, target);
                ActionOutcome::CityCaptured { city, from: owner, cells }
            } else {
                state.players[player].remove_unit(unit);
                ActionOutcome::CityAttackFailed { city }
            }
        }
    }
}

fn relocate(state: &mut GameState, player: PlayerId, unit: UnitId, target: Position) {
    if let Some(mover) = state.players[player].unit_mut(unit) {
        mover.position = target;
        mover.has_moved = true;
    }
}

/// Hand a city and the defender's cells within distance 1 of it to the
/// attacker. Returns how many cells changed hands.
fn capture_city(state: &mut GameState, attacker: PlayerId, defender: PlayerId, city: CityId) -> usize {
    let Some(mut captured) = state.players[defender].remove_city(city) else {
        return 0;
    };
    let centre = captured.position;

    let loser = &mut state.players[defender];
    let transferred: Vec<Position> = loser
        .owned_cells
        .iter()
        .copied()
        .filter(|cell| cell.distance(centre) <= 1.0)
        .collect();
    for cell in &transferred {
        loser.owned_cells.remove(cell);
    }

    captured.owner = attacker;
    let winner = &mut state.players[attacker];
    winner.cities.push(captured);
    for &cell in &transferred {
        winner.claim(cell);
    }

    transferred.len()
}
