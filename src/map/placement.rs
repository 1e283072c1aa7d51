//! Starting capital placement by rejection sampling.

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use super::WorldMap;
use crate::core::{GameConfig, GameRng, Position};
use crate::error::InitError;

/// Place one capital per player.
///
/// Each draw picks a cell uniformly from the interior
/// `[margin, rows - margin) × [margin, cols - margin)` and accepts it if it
/// is land, not already taken, and at least `min_capital_distance` from
/// every capital accepted so far. Running out of attempts for any capital
/// fails the whole placement; there is no fallback.
pub fn find_starting_positions(
    world: &WorldMap,
    config: &GameConfig,
    rng: &mut GameRng,
) -> Result<Vec<Position>, InitError> {
    let margin = config.placement_margin;
    let rows = world.grid().rows();
    let cols = world.grid().cols();
    if rows - margin <= margin || cols - margin <= margin {
        return Err(InitError::MapTooSmall { rows, cols, margin });
    }

    let required = config.player_count;
    let mut positions = Vec::with_capacity(required);
    let mut used = FxHashSet::default();

    while positions.len() < required {
        let mut found = None;
        let mut attempts = 0;

        while found.is_none() && attempts < config.placement_attempts {
            attempts += 1;
            let candidate = Position::new(
                rng.gen_range(margin..rows - margin),
                rng.gen_range(margin..cols - margin),
            );

            if !world.is_land(candidate) || used.contains(&candidate) {
                continue;
            }

            let too_close = positions
                .iter()
                .any(|&p: &Position| p.distance(candidate) < config.min_capital_distance);
            if !too_close {
                found = Some(candidate);
            }
        }

        match found {
            Some(position) => {
                debug!(capital = positions.len(), %position, attempts, "placed capital");
                used.insert(position);
                positions.push(position);
            }
            None => {
                warn!(
                    placed = positions.len(),
                    required,
                    attempts = config.placement_attempts,
                    "capital placement exhausted"
                );
                return Err(InitError::PlacementExhausted {
                    placed: positions.len(),
                    required,
                    attempts: config.placement_attempts,
                });
            }
        }
    }

    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_places_six_spread_out_capitals() {
        let config = GameConfig::default();
        let world = WorldMap::new(&config, 42);
        let mut rng = GameRng::new(42).for_context("placement");

        let capitals = find_starting_positions(&world, &config, &mut rng).unwrap();

        assert_eq!(capitals.len(), 6);
        for (i, a) in capitals.iter().enumerate() {
            assert!(world.is_land(*a));
            assert!((5..45).contains(&a.row));
            assert!((5..75).contains(&a.col));
            for b in &capitals[i + 1..] {
                assert!(a.distance(*b) >= 10.0);
            }
        }
    }

    #[test]
    fn test_placement_is_reproducible() {
        let config = GameConfig::default();
        let world = WorldMap::new(&config, 1234);

        let first = find_starting_positions(&world, &config, &mut GameRng::new(1234).for_context("placement"));
        let second = find_starting_positions(&world, &config, &mut GameRng::new(1234).for_context("placement"));

        assert_eq!(first, second);
    }

    #[test]
    fn test_impossible_spacing_fails() {
        let mut config = GameConfig::default();
        config.min_capital_distance = 500.0;
        config.placement_attempts = 50;
        let world = WorldMap::new(&config, 42);
        let mut rng = GameRng::new(42);

        let err = find_starting_positions(&world, &config, &mut rng).unwrap_err();

        assert_eq!(
            err,
            InitError::PlacementExhausted { placed: 1, required: 6, attempts: 50 }
        );
    }

    #[test]
    fn test_margin_too_large() {
        let config = GameConfig::default().with_map_size(10, 10);
        let world = WorldMap::new(&config, 42);
        let mut rng = GameRng::new(42);

        let err = find_starting_positions(&world, &config, &mut rng).unwrap_err();
        assert_eq!(err, InitError::MapTooSmall { rows: 10, cols: 10, margin: 5 });
    }
}
