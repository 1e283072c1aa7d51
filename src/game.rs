//! The game facade.
//!
//! `Game` bundles the configuration, the static world, the mutable state
//! and the chance source behind the query/command surface that front ends
//! use. Commands go through the rules in `crate::rules`; nothing here
//! changes state on its own.
//!
//! ```
//! use hex_dominion::{Action, Game, GameConfig, PlayerId};
//!
//! let mut game = Game::new(GameConfig::default(), 42).unwrap();
//! let me = game.current_player();
//! let capital = game.players()[me].cities[0].id;
//!
//! // Starting gold pays for one explorer but not a soldier.
//! assert!(game.perform_action(me, &Action::ProduceUnit {
//!     city: capital,
//!     unit_type: hex_dominion::UnitType::Explorer,
//! }));
//! assert_eq!(game.actions_remaining(), 1);
//!
//! game.end_turn();
//! assert_eq!(game.current_player(), PlayerId::new(1));
//! ```

use im::Vector;
use tracing::info;

use crate::core::{
    Action, ActionOutcome, ActionRecord, City, GameConfig, GameRng, GameState, Player, PlayerId,
    PlayerMap, Position, RandomSource, Unit, UnitId, UnitType,
};
use crate::error::{ActionError, InitError};
use crate::map::{find_starting_positions, WorldMap};
use crate::rules::{self, TurnAdvance, Victory};

/// A running game.
#[derive(Clone, Debug)]
pub struct Game<R: RandomSource = GameRng> {
    config: GameConfig,
    world: WorldMap,
    state: GameState,
    rng: R,
    seed: u64,
}

impl Game<GameRng> {
    /// Generate the world for `seed`, place capitals and set up the opening
    /// position. Combat draws from the seed's `"combat"` stream.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, InitError> {
        let rng = GameRng::new(seed).for_context("combat");
        Self::with_random_source(config, seed, rng)
    }
}

impl<R: RandomSource> Game<R> {
    /// Like [`Game::new`] with a caller-supplied chance source.
    pub fn with_random_source(config: GameConfig, seed: u64, rng: R) -> Result<Self, InitError> {
        let world = WorldMap::new(&config, seed);
        let mut placement = GameRng::new(seed).for_context("placement");
        let capitals = find_starting_positions(&world, &config, &mut placement)?;
        let state = GameState::new(&config, &capitals);

        info!(
            seed,
            players = config.player_count,
            land = world.land_cell_count(),
            "game created"
        );

        Ok(Self {
            config,
            world,
            state,
            rng,
            seed,
        })
    }

    /// Assemble a game from existing parts.
    #[must_use]
    pub fn from_parts(config: GameConfig, world: WorldMap, state: GameState, rng: R, seed: u64) -> Self {
        Self {
            config,
            world,
            state,
            rng,
            seed,
        }
    }

    // === Queries ===

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player
    }

    /// All players.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.state.players
    }

    /// Actions left in the current turn.
    #[must_use]
    pub fn actions_remaining(&self) -> u8 {
        self.state.actions_remaining
    }

    /// Completed months.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.state.current_month
    }

    /// Whether a cell is land. Off-grid cells are water.
    #[must_use]
    pub fn is_land(&self, position: Position) -> bool {
        self.world.is_land(position)
    }

    /// First unit on a cell, in player order.
    #[must_use]
    pub fn unit_at(&self, position: Position) -> Option<&Unit> {
        self.state.unit_at(position)
    }

    /// City on a cell, if any.
    #[must_use]
    pub fn city_at(&self, position: Position) -> Option<&City> {
        self.state.city_at(position)
    }

    /// Gold needed to produce a unit type.
    #[must_use]
    pub fn unit_cost(&self, unit_type: UnitType) -> i64 {
        unit_type.cost()
    }

    /// Owned land cells of a player, or 0 for an unknown player.
    #[must_use]
    pub fn owned_land_cells(&self, player: PlayerId) -> usize {
        self.state
            .players
            .try_get(player)
            .map_or(0, |p| p.owned_land_cells(&self.world))
    }

    /// Whether a victory condition has been met.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    /// Winning player, if the game ended with one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner
    }

    /// How the game ended, once it has.
    #[must_use]
    pub fn victory(&self) -> Option<Victory> {
        self.state.victory
    }

    /// Every executed action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.state.action_history
    }

    /// Full game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state, for scenario setup.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Grid and terrain.
    #[must_use]
    pub fn world(&self) -> &WorldMap {
        &self.world
    }

    /// Rule constants.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The seed the world was generated from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    // === Commands ===

    /// Whether `player` could take `action` now.
    #[must_use]
    pub fn is_valid_action(&self, player: PlayerId, action: &Action) -> bool {
        self.check_action(player, action).is_ok()
    }

    /// Why `action` would be rejected, if it would.
    pub fn check_action(&self, player: PlayerId, action: &Action) -> Result<(), ActionError> {
        rules::validate(&self.state, &self.world, &self.config, player, action)
    }

    /// Take an action. Returns `false` and changes nothing if it is rejected.
    pub fn perform_action(&mut self, player: PlayerId, action: &Action) -> bool {
        self.try_action(player, action).is_ok()
    }

    /// Take an action, reporting what happened or why it was rejected.
    pub fn try_action(&mut self, player: PlayerId, action: &Action) -> Result<ActionOutcome, ActionError> {
        rules::execute(
            &mut self.state,
            &self.world,
            &self.config,
            &mut self.rng,
            player,
            action,
        )
    }

    /// End the current player's turn.
    pub fn end_turn(&mut self) -> TurnAdvance {
        rules::end_turn(&mut self.state, &self.world, &self.config)
    }

    /// Every cell a unit could move to right now, row-major.
    ///
    /// Empty if the unit does not exist or has moved, and for every unit
    /// once the current turn has no actions left, whoever owns it.
    #[must_use]
    pub fn valid_moves(&self, unit: UnitId) -> Vec<Position> {
        let Some(mover) = self.state.find_unit(unit) else {
            return Vec::new();
        };
        let owner = mover.owner;
        let radius = mover.unit_type.stats().move_range as i32;

        self.world
            .grid()
            .cells_around(mover.position, radius)
            .filter(|&target| {
                let action = Action::MoveUnit { unit, target };
                rules::validate(&self.state, &self.world, &self.config, owner, &action).is_ok()
            })
            .collect()
    }

    /// Let `controller` play every consecutive AI turn.
    ///
    /// Stops at the first human player or when the game ends. Returns the
    /// number of turns played.
    pub fn run_ai_turns<C: Controller<R> + ?Sized>(&mut self, controller: &mut C) -> u32 {
        let mut turns = 0;
        while !self.state.game_over && self.state.current().is_ai {
            let player = self.state.current_player;
            controller.play_turn(self, player);
            self.end_turn();
            turns += 1;
        }
        turns
    }
}

/// Decides the actions of a player during its turn.
pub trait Controller<R: RandomSource = GameRng> {
    /// Take any actions for `player`. The turn is ended by the caller.
    fn play_turn(&mut self, game: &mut Game<R>, player: PlayerId);
}

/// A controller that never acts.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassiveController;

impl<R: RandomSource> Controller<R> for PassiveController {
    fn play_turn(&mut self, _game: &mut Game<R>, _player: PlayerId) {}
}
