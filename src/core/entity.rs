//! Units, cities and their identities.
//!
//! ## ID Layout
//!
//! Units and cities draw from one shared counter in `EntityAllocator`, so
//! no unit ever shares a raw id with a city. The typed wrappers `UnitId`
//! and `CityId` keep the two from being mixed up in actions.
//!
//! ```
//! use hex_dominion::EntityAllocator;
//!
//! let mut ids = EntityAllocator::new();
//! let unit = ids.next_unit();
//! let city = ids.next_city();
//!
//! assert_ne!(unit.raw(), city.raw());
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::Position;

/// Identifier of a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

/// Identifier of a city.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityId(pub u32);

impl CityId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "City({})", self.0)
    }
}

/// Hands out globally unique entity ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a unit id.
    pub fn next_unit(&mut self) -> UnitId {
        UnitId(self.bump())
    }

    /// Allocate a city id.
    pub fn next_city(&mut self) -> CityId {
        CityId(self.bump())
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }

    fn bump(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Fixed statistics of a unit type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitStats {
    /// Gold needed to produce one.
    pub cost: i64,
    /// Maximum Euclidean distance per move.
    pub move_range: u32,
    /// Naval units move only on water, everything else only on land.
    pub is_naval: bool,
}

/// Kind of unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    /// Cheap, fast land unit that can found cities.
    Explorer,
    /// Slow land unit.
    Soldier,
    /// Water-only unit.
    Naval,
}

impl UnitType {
    /// Every unit type, in production-menu order.
    pub const ALL: [UnitType; 3] = [UnitType::Explorer, UnitType::Soldier, UnitType::Naval];

    /// Statistics for this unit type.
    #[must_use]
    pub const fn stats(self) -> UnitStats {
        match self {
            UnitType::Explorer => UnitStats { cost: 20, move_range: 2, is_naval: false },
            UnitType::Soldier => UnitStats { cost: 30, move_range: 1, is_naval: false },
            UnitType::Naval => UnitStats { cost: 50, move_range: 2, is_naval: true },
        }
    }

    /// Production cost in gold.
    #[must_use]
    pub const fn cost(self) -> i64 {
        self.stats().cost
    }

    /// Whether this unit type may attack an enemy city.
    #[must_use]
    pub const fn can_attack_cities(self) -> bool {
        matches!(self, UnitType::Explorer | UnitType::Soldier)
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            UnitType::Explorer => "Explorer",
            UnitType::Soldier => "Soldier",
            UnitType::Naval => "Naval",
        };
        f.write_str(name)
    }
}

/// A unit on the map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unique identity.
    pub id: UnitId,
    /// Kind of unit.
    pub unit_type: UnitType,
    /// Current cell.
    pub position: Position,
    /// Owning player.
    pub owner: PlayerId,
    /// Set after moving; cleared when the owner's turn ends.
    pub has_moved: bool,
}

impl Unit {
    /// Create a fresh unit that has not moved.
    #[must_use]
    pub fn new(id: UnitId, unit_type: UnitType, position: Position, owner: PlayerId) -> Self {
        Self {
            id,
            unit_type,
            position,
            owner,
            has_moved: false,
        }
    }
}

/// A city on the map.
///
/// `is_capital` is set at founding and survives capture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Unique identity.
    pub id: CityId,
    /// Cell the city occupies.
    pub position: Position,
    /// Owning player.
    pub owner: PlayerId,
    /// Whether this was a player's starting capital.
    pub is_capital: bool,
}

impl City {
    /// Create a city.
    #[must_use]
    pub fn new(id: CityId, position: Position, owner: PlayerId, is_capital: bool) -> Self {
        Self {
            id,
            position,
            owner,
            is_capital,
        }
    }
}
