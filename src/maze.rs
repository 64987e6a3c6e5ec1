//! Immutable maze grid: tile rewards, blocked cells, and the goal tile.

use crate::{
    Result,
    error::Error,
    types::Position,
};

/// Tile value marking a blocked or out-of-range destination.
pub const BLOCKED: i32 = -1;

/// Reward on the goal tile of the built-in layout.
pub const DEFAULT_GOAL_REWARD: i32 = 10;

/// A fixed-size grid of tile values.
///
/// Each cell holds `-1` for a blocked tile or the reward obtained by entering
/// it (0 for neutral tiles, a distinguished positive value for the goal).
/// The grid is immutable once constructed, so it can be queried from anywhere
/// without synchronization.
#[derive(Debug, Clone)]
pub struct Maze {
    width: usize,
    height: usize,
    tiles: Vec<i32>,
    goal: Position,
}

impl Maze {
    /// Build a maze from row-major tile values.
    ///
    /// The goal is the tile carrying the maximum positive value. Rows must be
    /// non-empty and of equal length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMazeLayout`] for empty or ragged input, or when
    /// no tile carries a positive reward.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        let height = rows.len();
        if height == 0 {
            return Err(Error::InvalidMazeLayout {
                message: "maze must have at least one row".to_string(),
            });
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(Error::InvalidMazeLayout {
                message: "maze rows must not be empty".to_string(),
            });
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::InvalidMazeLayout {
                message: format!(
                    "row {} has {} tiles, expected {}",
                    i,
                    row.len(),
                    width
                ),
            });
        }

        let tiles: Vec<i32> = rows.into_iter().flatten().collect();
        let (goal_idx, goal_value) = tiles
            .iter()
            .copied()
            .enumerate()
            .max_by_key(|&(_, v)| v)
            .expect("non-empty by construction");
        if goal_value <= 0 {
            return Err(Error::InvalidMazeLayout {
                message: "maze must contain a tile with a positive goal reward".to_string(),
            });
        }
        let goal = Position::new((goal_idx % width) as i32, (goal_idx / width) as i32);

        Ok(Maze {
            width,
            height,
            tiles,
            goal,
        })
    }

    /// The fixed 6x5 layout the simulation ships with: a handful of interior
    /// walls and a single goal tile in the far corner.
    pub fn default_layout() -> Self {
        Maze::from_rows(vec![
            vec![0, 0, 0, -1, 0, 0],
            vec![0, -1, 0, -1, 0, 0],
            vec![0, -1, 0, 0, 0, -1],
            vec![0, 0, 0, -1, 0, 0],
            vec![-1, 0, 0, 0, 0, DEFAULT_GOAL_REWARD],
        ])
        .expect("built-in layout is well-formed")
    }

    /// Tile value at `(x, y)`.
    ///
    /// Returns [`BLOCKED`] for coordinates outside `[0, width) x [0, height)`
    /// as well as for blocked tiles; out-of-range queries are a normal case,
    /// not a fault.
    pub fn tile_value(&self, x: i32, y: i32) -> i32 {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return BLOCKED;
        }
        self.tiles[y as usize * self.width + x as usize]
    }

    /// Tile value at a position.
    pub fn tile_value_at(&self, position: Position) -> i32 {
        self.tile_value(position.x, position.y)
    }

    /// Whether `position` is inside the grid and not blocked.
    pub fn is_open(&self, position: Position) -> bool {
        self.tile_value_at(position) != BLOCKED
    }

    /// Whether `position` is the goal tile.
    pub fn is_goal(&self, position: Position) -> bool {
        position == self.goal
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_3x3() -> Maze {
        Maze::from_rows(vec![
            vec![0, 0, 0],
            vec![0, 0, 0],
            vec![0, 0, 10],
        ])
        .unwrap()
    }

    #[test]
    fn tile_value_returns_rewards_in_range() {
        let maze = open_3x3();
        assert_eq!(maze.tile_value(0, 0), 0);
        assert_eq!(maze.tile_value(2, 2), 10);
    }

    #[test]
    fn out_of_range_coordinates_are_blocked() {
        let maze = open_3x3();
        assert_eq!(maze.tile_value(-1, 0), BLOCKED);
        assert_eq!(maze.tile_value(0, -1), BLOCKED);
        assert_eq!(maze.tile_value(3, 0), BLOCKED);
        assert_eq!(maze.tile_value(0, 3), BLOCKED);
        assert_eq!(maze.tile_value(i32::MAX, i32::MIN), BLOCKED);
    }

    #[test]
    fn blocked_tiles_report_the_sentinel() {
        let maze = Maze::from_rows(vec![vec![0, -1], vec![0, 5]]).unwrap();
        assert_eq!(maze.tile_value(1, 0), BLOCKED);
        assert!(!maze.is_open(Position::new(1, 0)));
        assert!(maze.is_open(Position::new(0, 1)));
    }

    #[test]
    fn goal_is_the_maximum_positive_tile() {
        let maze = open_3x3();
        assert_eq!(maze.goal(), Position::new(2, 2));
        assert!(maze.is_goal(Position::new(2, 2)));
        assert!(!maze.is_goal(Position::new(0, 0)));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Maze::from_rows(vec![vec![0, 0], vec![0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidMazeLayout { .. }));
    }

    #[test]
    fn empty_layouts_are_rejected() {
        assert!(Maze::from_rows(vec![]).is_err());
        assert!(Maze::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn layout_without_goal_is_rejected() {
        let err = Maze::from_rows(vec![vec![0, 0], vec![0, -1]]).unwrap_err();
        assert!(matches!(err, Error::InvalidMazeLayout { .. }));
    }

    #[test]
    fn default_layout_is_well_formed() {
        let maze = Maze::default_layout();
        assert_eq!(maze.width(), 6);
        assert_eq!(maze.height(), 5);
        assert_eq!(maze.tile_value_at(maze.goal()), DEFAULT_GOAL_REWARD);
    }
}
