//! End-to-end tests through the `Game` facade.
//!
//! These drive whole turns and months the way a front end would: queries,
//! boolean commands and `end_turn`.

use std::collections::VecDeque;

use hex_dominion::{
    Action, ActionError, ActionOutcome, Controller, Game, GameConfig, InitError, PassiveController,
    PlayerId, Position, RandomSource, UnitType, VictoryKind,
};

/// Chance source that answers from a script, then always `false`.
#[derive(Debug, Default)]
struct Scripted(VecDeque<bool>);

impl Scripted {
    fn new(rolls: &[bool]) -> Self {
        Self(rolls.iter().copied().collect())
    }
}

impl RandomSource for Scripted {
    fn roll(&mut self, _probability: f64) -> bool {
        self.0.pop_front().unwrap_or(false)
    }
}

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

fn snapshot<R: RandomSource>(game: &Game<R>) -> serde_json::Value {
    serde_json::to_value(game.state()).unwrap()
}

/// Orthogonal neighbours of `from` that are free land.
fn free_land_steps<R: RandomSource>(game: &Game<R>, from: Position) -> Vec<Position> {
    [(-1, 0), (1, 0), (0, -1), (0, 1)]
        .into_iter()
        .map(|(dr, dc)| from.offset(dr, dc))
        .filter(|&p| game.is_land(p) && game.unit_at(p).is_none() && game.city_at(p).is_none())
        .collect()
}

#[test]
fn test_placement_properties() {
    let mut created = 0;
    for seed in [1, 2, 3, 42, 1234, 99_999] {
        let game = match Game::new(GameConfig::default(), seed) {
            Ok(game) => game,
            Err(InitError::PlacementExhausted { .. }) => continue,
            Err(err) => panic!("unexpected init error: {err}"),
        };
        created += 1;

        let capitals: Vec<Position> = game.players().values().map(|p| p.cities[0].position).collect();
        assert_eq!(capitals.len(), 6);
        for (i, &a) in capitals.iter().enumerate() {
            assert!(game.is_land(a));
            for &b in &capitals[i + 1..] {
                assert!(a.distance(b) >= 10.0, "seed {seed}: {a} and {b} too close");
            }
        }

        for player in game.players().values() {
            assert_eq!(player.gold, 20);
            assert_eq!(player.cities.len(), 1);
            assert_eq!(player.capital(), Some(&player.cities[0]));
            assert_eq!(player.units.len(), 1);
            assert_eq!(player.units[0].unit_type, UnitType::Explorer);
        }
    }
    assert!(created > 0);
    assert!(Game::new(GameConfig::default(), 42).is_ok());
}

#[test]
fn test_explorer_moves_once_per_turn() {
    let mut game = Game::new(GameConfig::default(), 42).unwrap();
    let explorer = game.players()[P0].units[0].clone();
    let target = free_land_steps(&game, explorer.position)[0];
    let step = Action::MoveUnit { unit: explorer.id, target };

    assert!(game.perform_action(P0, &step));

    let moved = game.players()[P0].unit(explorer.id).unwrap();
    assert_eq!(moved.position, target);
    assert!(moved.has_moved);
    assert_eq!(game.actions_remaining(), 1);

    let back = Action::MoveUnit { unit: explorer.id, target: explorer.position };
    assert!(!game.perform_action(P0, &back));
    assert_eq!(game.actions_remaining(), 1);
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_budget_resets_each_turn() {
    let config = GameConfig::default().with_starting_gold(1000);
    let mut game = Game::new(config, 42).unwrap();

    for _ in 0..6 {
        let me = game.current_player();
        let city = game.players()[me].cities[0].id;
        let build = Action::ProduceUnit { city, unit_type: UnitType::Explorer };

        assert_eq!(game.actions_remaining(), 2);
        assert!(game.perform_action(me, &build));
        assert_eq!(game.actions_remaining(), 1);
        assert!(game.perform_action(me, &build));
        assert_eq!(game.actions_remaining(), 0);
        assert_eq!(game.try_action(me, &build), Err(ActionError::NoActionsRemaining));
        assert_eq!(game.players()[me].gold, 960);

        game.end_turn();
    }
}

#[test]
fn test_rejected_action_changes_nothing() {
    let mut game = Game::new(GameConfig::default(), 42).unwrap();
    let city = game.players()[P0].cities[0].id;
    let explorer = game.players()[P0].units[0].id;
    let before = snapshot(&game);

    assert!(!game.perform_action(P0, &Action::ProduceUnit { city, unit_type: UnitType::Naval }));
    assert!(!game.perform_action(P0, &Action::FoundCity { explorer }));
    assert!(!game.perform_action(PlayerId::new(7), &Action::ProduceUnit { city, unit_type: UnitType::Explorer }));

    assert_eq!(snapshot(&game), before);
}

#[test]
fn test_round_pays_income_once() {
    let mut game = Game::new(GameConfig::default(), 42).unwrap();

    let advances: Vec<_> = (0..6).map(|_| game.end_turn()).collect();

    assert_eq!(advances.iter().filter(|a| a.month_ended).count(), 1);
    assert!(advances[5].month_ended);
    assert_eq!(game.current_player(), P0);
    assert_eq!(game.month(), 1);
    for player in game.players().values() {
        assert_eq!(player.gold, 30);
        assert!(!player.owned_cells.is_empty());
    }
}

#[test]
fn test_found_city_after_moving() {
    let mut game = Game::new(GameConfig::default(), 42).unwrap();
    let explorer = game.players()[P0].units[0].clone();
    let target = free_land_steps(&game, explorer.position)
        .into_iter()
        .find(|&p| !game.state().is_cell_owned(p))
        .expect("capital has a free land neighbour");

    assert!(game.perform_action(P0, &Action::MoveUnit { unit: explorer.id, target }));
    let outcome = game.try_action(P0, &Action::FoundCity { explorer: explorer.id });

    assert!(matches!(outcome, Ok(ActionOutcome::CityFounded(_))));
    let player = &game.players()[P0];
    assert_eq!(player.cities.len(), 2);
    assert_eq!(player.gold, 0);
    assert!(player.units.is_empty());
    assert!(player.owns_cell(target));
    assert_eq!(game.city_at(target).map(|c| c.is_capital), Some(false));
}

#[test]
fn test_scripted_combat() {
    let mut game = Game::with_random_source(GameConfig::default(), 42, Scripted::new(&[false, true])).unwrap();
    let explorer = game.players()[P0].units[0].clone();
    let steps = free_land_steps(&game, explorer.position);
    let target = steps[0];

    // An enemy explorer guards the target. The script loses the first fight and wins the second.
    let state = game.state_mut();
    state.players[P0].gold = 100;
    let guard = state.alloc_unit_id();
    state.players[P1].units.push(hex_dominion::Unit::new(guard, UnitType::Explorer, target, P1));

    let attack = Action::MoveUnit { unit: explorer.id, target };
    assert_eq!(game.try_action(P0, &attack), Ok(ActionOutcome::CombatLost { defender: guard }));
    assert!(game.players()[P0].unit(explorer.id).is_none());

    let city = game.players()[P0].cities[0].id;
    let fresh = match game.try_action(P0, &Action::ProduceUnit { city, unit_type: UnitType::Explorer }) {
        Ok(ActionOutcome::UnitProduced(id)) => id,
        other => panic!("expected production, got {other:?}"),
    };
    assert_eq!(game.actions_remaining(), 0);

    for _ in 0..6 {
        game.end_turn();
    }
    let attack = Action::MoveUnit { unit: fresh, target };
    assert_eq!(game.try_action(P0, &attack), Ok(ActionOutcome::CombatWon { defender: guard }));
    assert_eq!(game.unit_at(target).map(|u| u.owner), Some(P0));

    let kinds: Vec<&str> = game.history().iter().map(|r| r.action.name()).collect();
    assert_eq!(kinds, ["MoveUnit", "ProduceUnit", "MoveUnit"]);
    assert_eq!(game.history().back().map(|r| r.month), Some(1));
}

#[test]
fn test_month_limit_ends_game() {
    let config = GameConfig::default().with_month_limit(1);
    let mut game = Game::new(config, 42).unwrap();

    let last = (0..6).map(|_| game.end_turn()).last().unwrap();

    assert!(game.is_game_over());
    let victory = game.victory().unwrap();
    assert_eq!(victory.kind, VictoryKind::TurnLimit);
    assert_eq!(last.victory, Some(victory));
    assert_eq!(game.winner(), victory.winner);
    let winner = game.winner().unwrap();
    for id in PlayerId::all(6) {
        assert!(game.owned_land_cells(id) <= game.owned_land_cells(winner));
    }
}

#[test]
fn test_all_ai_game_runs_to_the_limit() {
    let config = GameConfig::default().with_human_players(0).with_month_limit(3);
    let mut game = Game::new(config, 42).unwrap();

    let turns = game.run_ai_turns(&mut PassiveController);

    assert_eq!(turns, 18);
    assert!(game.is_game_over());
    assert_eq!(game.month(), 3);
}

/// Builds an explorer whenever it can afford one.
struct Builder {
    turns: u32,
}

impl<R: RandomSource> Controller<R> for Builder {
    fn play_turn(&mut self, game: &mut Game<R>, player: PlayerId) {
        self.turns += 1;
        let city = game.players()[player].cities[0].id;
        let build = Action::ProduceUnit { city, unit_type: UnitType::Explorer };
        while game.perform_action(player, &build) {}
    }
}

#[test]
fn test_controller_acts_for_ai_players() {
    let mut game = Game::new(GameConfig::default(), 42).unwrap();
    game.end_turn();
    let mut builder = Builder { turns: 0 };

    let played = game.run_ai_turns(&mut builder);

    assert_eq!(played, 5);
    assert_eq!(builder.turns, 5);
    for id in PlayerId::all(6).skip(1) {
        assert_eq!(game.players()[id].units.len(), 2);
    }
    assert_eq!(game.players()[P0].units.len(), 1);
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_state_serializes() {
    let mut game = Game::new(GameConfig::default(), 42).unwrap();
    let city = game.players()[P0].cities[0].id;
    assert!(game.perform_action(P0, &Action::ProduceUnit { city, unit_type: UnitType::Explorer }));

    let json = serde_json::to_string(game.state()).unwrap();
    let restored: hex_dominion::GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(serde_json::to_value(&restored).unwrap(), snapshot(&game));
    assert_eq!(restored.action_history.len(), 1);
}
