//! Action representation: one variant per action kind.
//!
//! Each variant carries exactly the data its kind needs, so a well-typed
//! action can never be missing a target or a unit type. The acting player
//! is passed alongside the action rather than inside it.
//!
//! ```
//! use hex_dominion::{Action, CityId, Position, UnitId, UnitType};
//!
//! let advance = Action::MoveUnit { unit: UnitId(3), target: Position::new(10, 12) };
//! let build = Action::ProduceUnit { city: CityId(1), unit_type: UnitType::Soldier };
//! let settle = Action::FoundCity { explorer: UnitId(3) };
//!
//! assert_eq!(advance.name(), "MoveUnit");
//! assert_ne!(build, settle);
//! ```

use serde::{Deserialize, Serialize};

use super::entity::{CityId, UnitId, UnitType};
use super::player::PlayerId;
use super::position::Position;

/// A command issued by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move a unit, fighting or attacking whatever stands on the target.
    MoveUnit {
        /// The unit to move.
        unit: UnitId,
        /// Destination cell.
        target: Position,
    },
    /// Spend gold to spawn a unit at one of the player's cities.
    ProduceUnit {
        /// The producing city.
        city: CityId,
        /// What to build.
        unit_type: UnitType,
    },
    /// Consume an explorer to found a city where it stands.
    FoundCity {
        /// The explorer to settle.
        explorer: UnitId,
    },
}

impl Action {
    /// Short name of the action kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::MoveUnit { .. } => "MoveUnit",
            Action::ProduceUnit { .. } => "ProduceUnit",
            Action::FoundCity { .. } => "FoundCity",
        }
    }
}

/// What an executed action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The unit relocated to an empty or friendly cell.
    Moved,
    /// The attacker destroyed the defending unit and took its cell.
    CombatWon {
        /// The destroyed unit.
        defender: UnitId,
    },
    /// The attacker was destroyed.
    CombatLost {
        /// The unit that held its ground.
        defender: UnitId,
    },
    /// The attacker captured a city and stands on it.
    CityCaptured {
        /// The captured city.
        city: CityId,
        /// The previous owner.
        from: PlayerId,
        /// Owned cells transferred with the city.
        cells: usize,
    },
    /// The attack on a city failed and the attacker was destroyed.
    CityAttackFailed {
        /// The city that held.
        city: CityId,
    },
    /// A new unit appeared at the producing city.
    UnitProduced(UnitId),
    /// A new city was founded and the explorer consumed.
    CityFounded(CityId),
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// What it did.
    pub outcome: ActionOutcome,

    /// Month when the action was taken.
    pub month: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, outcome: ActionOutcome, month: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            outcome,
            month,
            sequence,
        }
    }
}
