//! Per-tile action-selection state: excluded directions and random choice
//! among the remainder.

use rand::{rngs::StdRng, seq::IndexedRandom};

use crate::{
    Result,
    error::Error,
    types::{Direction, Position},
};

/// Exploration state for a single tile.
///
/// A direction is excluded only after an observed invalid move attempt from
/// this tile in that direction; exclusions never expire within a run. The
/// baseline selection policy is uniformly random over the non-excluded
/// directions, which guarantees a known-invalid move is never re-attempted.
#[derive(Debug, Clone, Default)]
pub struct Strategy {
    excluded: [bool; 4],
}

impl Strategy {
    pub fn new() -> Self {
        Strategy::default()
    }

    /// Draw a direction uniformly at random among the non-excluded ones.
    ///
    /// Returns `None` when all four directions are excluded; the caller
    /// decides how to surface that (see [`StrategyProfile`]).
    pub fn choose_direction(&self, rng: &mut StdRng) -> Option<Direction> {
        let eligible: Vec<Direction> = Direction::ALL
            .iter()
            .copied()
            .filter(|d| !self.is_excluded(*d))
            .collect();
        eligible.choose(rng).copied()
    }

    /// Idempotently add `direction` to the excluded set.
    pub fn exclude_direction(&mut self, direction: Direction) {
        self.excluded[direction.index()] = true;
    }

    pub fn is_excluded(&self, direction: Direction) -> bool {
        self.excluded[direction.index()]
    }

    /// Whether every direction is excluded.
    pub fn is_exhausted(&self) -> bool {
        self.excluded.iter().all(|&e| e)
    }
}

/// A [`Strategy`] per tile of the maze: the agent's full action-selection
/// policy surface.
///
/// Each tile's exclusion set is independent; there is no cross-tile state.
#[derive(Debug, Clone)]
pub struct StrategyProfile {
    width: usize,
    strategies: Vec<Strategy>,
}

impl StrategyProfile {
    /// Create a profile with one empty strategy per tile.
    pub fn new(width: usize, height: usize) -> Self {
        StrategyProfile {
            width,
            strategies: vec![Strategy::new(); width * height],
        }
    }

    fn index(&self, position: Position) -> usize {
        debug_assert!(position.x >= 0 && (position.x as usize) < self.width);
        position.y as usize * self.width + position.x as usize
    }

    /// Choose a non-excluded direction at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeadEnd`] when all four directions are excluded at the
    /// tile. A fully walled-off tile signals a malformed maze, so the run is
    /// aborted rather than clearing exclusions and looping.
    pub fn choose_direction_from_tile(
        &self,
        position: Position,
        rng: &mut StdRng,
    ) -> Result<Direction> {
        self.strategies[self.index(position)]
            .choose_direction(rng)
            .ok_or(Error::DeadEnd {
                x: position.x,
                y: position.y,
            })
    }

    /// Exclude `direction` at `position`.
    pub fn exclude_direction_from_tile(&mut self, position: Position, direction: Direction) {
        let idx = self.index(position);
        self.strategies[idx].exclude_direction(direction);
    }

    pub fn is_excluded(&self, position: Position, direction: Direction) -> bool {
        self.strategies[self.index(position)].is_excluded(direction)
    }
}
