//! Players and the seat-indexed table that holds them.
//!
//! Seats are numbered from 0 and a player's id is its seat. `PlayerMap`
//! keeps one value per seat in id order, which is also the order every
//! rule iterates in.

use std::ops::{Index, IndexMut};

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::entity::{City, CityId, Unit, UnitId};
use super::position::Position;
use crate::map::WorldMap;

/// Seat number of a player (0-based, at most 255 seats).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Id of seat `id`.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Seat as a table index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every seat of a `player_count`-player game, in turn order.
    ///
    /// ```
    /// use hex_dominion::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(6).collect();
    /// assert_eq!(seats.first(), Some(&PlayerId::new(0)));
    /// assert_eq!(seats.last(), Some(&PlayerId::new(5)));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(|seat| PlayerId(seat as u8))
    }

    /// The seat that moves after this one, wrapping to 0.
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat, indexed by `PlayerId`.
///
/// Indexing with an id outside the table panics; rules that take ids from
/// callers go through [`PlayerMap::try_get`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build a table of `player_count` seats from `seat_value`.
    pub fn new(player_count: usize, seat_value: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            seats: PlayerId::all(player_count).map(seat_value).collect(),
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Value for a seat, or `None` if the seat does not exist.
    #[must_use]
    pub fn try_get(&self, player: PlayerId) -> Option<&T> {
        self.seats.get(player.index())
    }

    /// Mutable value for a seat, or `None` if the seat does not exist.
    pub fn try_get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.seats.get_mut(player.index())
    }

    /// Seats and values in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.seats.len()).zip(self.seats.iter())
    }

    /// Seats and mutable values in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all(self.seats.len()).zip(self.seats.iter_mut())
    }

    /// Values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.seats.iter()
    }

    /// Seats in turn order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.seats.len())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }
}

/// One participant in the game.
///
/// `owned_cells` is a set: claiming a cell twice has no effect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Stable id, equal to the player's index.
    pub id: PlayerId,
    /// Whether a controller plays this seat instead of a human.
    pub is_ai: bool,
    /// Gold balance. Never clamped.
    pub gold: i64,
    /// Cities in founding/capture order.
    pub cities: Vec<City>,
    /// Units in creation order.
    pub units: Vec<Unit>,
    /// Territory credited to this player.
    pub owned_cells: OrdSet<Position>,
}

impl Player {
    /// Create a player with no cities, units or territory.
    #[must_use]
    pub fn new(id: PlayerId, is_ai: bool, gold: i64) -> Self {
        Self {
            id,
            is_ai,
            gold,
            cities: Vec::new(),
            units: Vec::new(),
            owned_cells: OrdSet::new(),
        }
    }

    /// Find one of this player's units.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Find one of this player's units mutably.
    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    /// Remove a unit, returning it if it was present.
    pub fn remove_unit(&mut self, id: UnitId) -> Option<Unit> {
        let index = self.units.iter().position(|u| u.id == id)?;
        Some(self.units.remove(index))
    }

    /// Find one of this player's cities.
    #[must_use]
    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }

    /// Remove a city, returning it if it was present.
    pub fn remove_city(&mut self, id: CityId) -> Option<City> {
        let index = self.cities.iter().position(|c| c.id == id)?;
        Some(self.cities.remove(index))
    }

    /// The first capital this player holds.
    ///
    /// Captured capitals keep their flag, so this may be another player's
    /// former capital if the player's own has fallen.
    #[must_use]
    pub fn capital(&self) -> Option<&City> {
        self.cities.iter().find(|c| c.is_capital)
    }

    /// Whether this player owns a cell.
    #[must_use]
    pub fn owns_cell(&self, position: Position) -> bool {
        self.owned_cells.contains(&position)
    }

    /// Add a cell to this player's territory.
    ///
    /// Returns true if the cell was newly claimed.
    pub fn claim(&mut self, position: Position) -> bool {
        self.owned_cells.insert(position).is_none()
    }

    /// Clear the moved flag on every unit.
    pub fn refresh_units(&mut self) {
        for unit in &mut self.units {
            unit.has_moved = false;
        }
    }

    /// Count of owned cells that are land.
    #[must_use]
    pub fn owned_land_cells(&self, world: &WorldMap) -> usize {
        self.owned_cells.iter().filter(|&&cell| world.is_land(cell)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::UnitType;

    #[test]
    fn test_turn_order_wraps() {
        let order: Vec<_> = std::iter::successors(Some(PlayerId::new(4)), |p| Some(p.next(6)))
            .take(4)
            .collect();

        assert_eq!(order, [PlayerId(4), PlayerId(5), PlayerId(0), PlayerId(1)]);
        assert_eq!(PlayerId::new(0).next(1), PlayerId::new(0));
        assert_eq!(PlayerId::new(3).to_string(), "Player 3");
    }

    #[test]
    fn test_seat_table() {
        let mut gold: PlayerMap<i64> = PlayerMap::new(3, |p| 20 * (p.index() as i64 + 1));

        assert_eq!(gold.player_count(), 3);
        assert_eq!(gold[PlayerId::new(2)], 60);
        assert_eq!(gold.try_get(PlayerId::new(3)), None);

        if let Some(g) = gold.try_get_mut(PlayerId::new(1)) {
            *g -= 30;
        }
        let seats: Vec<_> = gold.iter().map(|(id, g)| (id.index(), *g)).collect();
        assert_eq!(seats, [(0, 20), (1, 10), (2, 60)]);
        assert!(gold.player_ids().eq(PlayerId::all(3)));
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_empty_table_rejected() {
        let _ = PlayerMap::new(0, |_| ());
    }

    #[test]
    fn test_claim_is_idempotent() {
        let mut player = Player::new(PlayerId::new(0), false, 20);

        assert!(player.claim(Position::new(3, 3)));
        assert!(!player.claim(Position::new(3, 3)));
        assert_eq!(player.owned_cells.len(), 1);
        assert!(player.owns_cell(Position::new(3, 3)));
    }

    #[test]
    fn test_unit_lookup_and_removal() {
        let owner = PlayerId::new(2);
        let mut player = Player::new(owner, true, 0);
        player.units.push(Unit::new(UnitId(1), UnitType::Explorer, Position::new(0, 0), owner));
        player.units.push(Unit::new(UnitId(2), UnitType::Soldier, Position::new(0, 1), owner));

        assert!(player.unit(UnitId(2)).is_some());
        assert_eq!(player.remove_unit(UnitId(1)).map(|u| u.id), Some(UnitId(1)));
        assert!(player.remove_unit(UnitId(1)).is_none());
        assert_eq!(player.units.len(), 1);
    }

    #[test]
    fn test_refresh_units() {
        let owner = PlayerId::new(0);
        let mut player = Player::new(owner, false, 0);
        let mut unit = Unit::new(UnitId(1), UnitType::Explorer, Position::new(0, 0), owner);
        unit.has_moved = true;
        player.units.push(unit);

        player.refresh_units();

        assert!(!player.units[0].has_moved);
    }

    #[test]
    fn test_player_round_trips_through_json() {
        let owner = PlayerId::new(1);
        let mut player = Player::new(owner, true, 45);
        player.cities.push(City::new(CityId(0), Position::new(12, 40), owner, true));
        player.claim(Position::new(12, 40));
        player.claim(Position::new(12, 41));

        let json = serde_json::to_string(&player).unwrap();
        let restored: Player = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, player);
    }
}
