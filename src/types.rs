//! Value types shared across the simulation: tile coordinates and compass directions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tile coordinate in the maze.
///
/// Coordinates are signed so that candidate destinations one step off the
/// grid remain representable; the maze itself treats any out-of-range
/// coordinate as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// The tile reached by moving one step in `direction`.
    ///
    /// The result may lie outside the maze; callers resolve validity through
    /// [`crate::maze::Maze::tile_value`].
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four compass directions an agent can move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed iteration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Coordinate delta for this direction. Up decreases y, matching the
    /// row-major layout the maze renders in.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Stable index of this direction in [`Direction::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_applies_direction_delta() {
        let pos = Position::new(2, 2);
        assert_eq!(pos.step(Direction::Up), Position::new(2, 1));
        assert_eq!(pos.step(Direction::Down), Position::new(2, 3));
        assert_eq!(pos.step(Direction::Left), Position::new(1, 2));
        assert_eq!(pos.step(Direction::Right), Position::new(3, 2));
    }

    #[test]
    fn step_can_leave_the_grid() {
        // Off-grid candidates are representable; the maze rejects them later.
        assert_eq!(
            Position::new(0, 0).step(Direction::Up),
            Position::new(0, -1)
        );
    }

    #[test]
    fn direction_indices_match_all_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }
}
