//! The learning agent: action selection, Q-updates, and move application.

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    config::{GoalPolicy, SimulationConfig},
    maze::{BLOCKED, Maze},
    q_learning::QTable,
    strategy::StrategyProfile,
    types::{Direction, Position},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Outcome of one move attempt, valid or not.
///
/// This is the event payload forwarded to the presentation side: positions
/// before and after, the attempted direction, the running score, and the
/// updated utility for (old position, direction).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub old_position: Position,
    pub new_position: Position,
    pub direction: Direction,
    /// Reward collected by the move; zero for invalid attempts
    pub reward: i32,
    /// Cumulative score after the move
    pub score: i64,
    /// Utility of (old_position, direction) after the update
    pub utility: f64,
    /// Whether the attempted destination was enterable
    pub valid: bool,
    /// Whether the move entered the goal tile
    pub reached_goal: bool,
}

/// A single Q-learning agent in a maze.
///
/// Each simulation step runs two phases:
///
/// 1. **Select** — ask the per-tile [`StrategyProfile`] for a direction and
///    compute the candidate destination.
/// 2. **Apply** — query the maze. An invalid destination excludes the
///    direction at the current tile and drags its utility toward the
///    invalid-move penalty; a valid one applies the full Q-learning update,
///    moves the agent, and adds the reward to the cumulative score.
#[derive(Debug)]
pub struct Agent {
    position: Position,
    start: Position,
    score: i64,
    q_table: QTable,
    profile: StrategyProfile,
    goal_policy: GoalPolicy,
    invalid_move_penalty: f64,
    rng: StdRng,
}

impl Agent {
    /// Create an agent for `maze` using `config`.
    ///
    /// The strategy profile starts with no exclusions and the utility table
    /// at its baseline of 0.0 for every pair.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when parameters are out of range or the
    /// start tile is blocked.
    pub fn new(maze: &Maze, config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        if !maze.is_open(config.start) {
            return Err(crate::error::Error::InvalidStartPosition {
                x: config.start.x,
                y: config.start.y,
            });
        }
        Ok(Agent {
            position: config.start,
            start: config.start,
            score: 0,
            q_table: QTable::new(config.learning_rate, config.discount_factor, 0.0),
            profile: StrategyProfile::new(maze.width(), maze.height()),
            goal_policy: config.goal_policy,
            invalid_move_penalty: config.invalid_move_penalty,
            rng: build_rng(config.seed),
        })
    }

    /// Run one select-apply cycle.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DeadEnd`] when every direction at the current
    /// tile is excluded.
    pub fn step(&mut self, maze: &Maze) -> Result<MoveRecord> {
        let direction = self
            .profile
            .choose_direction_from_tile(self.position, &mut self.rng)?;
        Ok(self.apply_direction(maze, direction))
    }

    /// Apply a specific direction from the current position.
    ///
    /// Public so scripted scenarios and tests can drive deterministic move
    /// sequences; [`Agent::step`] uses it after random selection.
    pub fn apply_direction(&mut self, maze: &Maze, direction: Direction) -> MoveRecord {
        let old_position = self.position;
        let candidate = old_position.step(direction);
        let tile_value = maze.tile_value_at(candidate);

        if tile_value == BLOCKED {
            self.profile
                .exclude_direction_from_tile(old_position, direction);
            let utility =
                self.q_table
                    .penalty_update(old_position, direction, self.invalid_move_penalty);
            return MoveRecord {
                old_position,
                new_position: old_position,
                direction,
                reward: 0,
                score: self.score,
                utility,
                valid: false,
                reached_goal: false,
            };
        }

        let utility =
            self.q_table
                .update(old_position, direction, f64::from(tile_value), candidate);
        self.position = candidate;
        self.score += i64::from(tile_value);

        let reached_goal = maze.is_goal(candidate);
        if reached_goal && self.goal_policy == GoalPolicy::ResetToStart {
            // Utilities and exclusions survive the reset; only the position
            // returns to the start tile.
            self.position = self.start;
        }

        MoveRecord {
            old_position,
            new_position: candidate,
            direction,
            reward: tile_value,
            score: self.score,
            utility,
            valid: true,
            reached_goal,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Learned utility for a (position, direction) pair.
    pub fn q_value(&self, position: Position, direction: Direction) -> f64 {
        self.q_table.get(position, direction)
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    pub fn strategy_profile(&self) -> &StrategyProfile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Maze;

    fn open_3x3() -> Maze {
        Maze::from_rows(vec![
            vec![0, 0, 0],
            vec![0, 0, 0],
            vec![0, 0, 10],
        ])
        .unwrap()
    }

    fn agent_for(maze: &Maze) -> Agent {
        Agent::new(maze, &SimulationConfig::new().with_seed(42)).unwrap()
    }

    #[test]
    fn invalid_move_stays_put_and_excludes_direction() {
        let maze = open_3x3();
        let mut agent = agent_for(&maze);

        let record = agent.apply_direction(&maze, Direction::Up);

        assert!(!record.valid);
        assert_eq!(record.old_position, Position::new(0, 0));
        assert_eq!(record.new_position, Position::new(0, 0));
        assert_eq!(agent.position(), Position::new(0, 0));
        assert_eq!(agent.score(), 0);
        assert!(
            agent
                .strategy_profile()
                .is_excluded(Position::new(0, 0), Direction::Up)
        );
    }

    #[test]
    fn invalid_move_drags_utility_toward_the_penalty() {
        let maze = open_3x3();
        let mut agent = agent_for(&maze);

        let before = agent.q_value(Position::new(0, 0), Direction::Up);
        let record = agent.apply_direction(&maze, Direction::Up);

        assert!(record.utility < before);
        assert_eq!(record.utility, agent.q_value(Position::new(0, 0), Direction::Up));
    }

    #[test]
    fn valid_move_updates_position_and_score() {
        let maze = open_3x3();
        let mut agent = Agent::new(
            &maze,
            &SimulationConfig::new()
                .with_seed(42)
                .with_goal_policy(GoalPolicy::Continue),
        )
        .unwrap();

        for direction in [
            Direction::Right,
            Direction::Right,
            Direction::Down,
            Direction::Down,
        ] {
            let record = agent.apply_direction(&maze, direction);
            assert!(record.valid);
        }

        assert_eq!(agent.position(), Position::new(2, 2));
        assert_eq!(agent.score(), 10);
    }

    #[test]
    fn goal_entry_utility_strictly_increases() {
        let maze = open_3x3();
        let mut agent = agent_for(&maze);

        let before = agent.q_value(Position::new(2, 1), Direction::Down);
        assert_eq!(before, 0.0);

        // Move along the top and right edge into the goal.
        agent.apply_direction(&maze, Direction::Right);
        agent.apply_direction(&maze, Direction::Right);
        agent.apply_direction(&maze, Direction::Down);
        let record = agent.apply_direction(&maze, Direction::Down);

        assert!(record.reached_goal);
        assert!(agent.q_value(Position::new(2, 1), Direction::Down) > before);
    }

    #[test]
    fn reset_to_start_returns_agent_after_goal() {
        let maze = open_3x3();
        let mut agent = agent_for(&maze);

        agent.apply_direction(&maze, Direction::Right);
        agent.apply_direction(&maze, Direction::Right);
        agent.apply_direction(&maze, Direction::Down);
        let record = agent.apply_direction(&maze, Direction::Down);

        assert!(record.reached_goal);
        assert_eq!(record.new_position, Position::new(2, 2));
        assert_eq!(agent.position(), Position::new(0, 0));
        // Score and utilities survive the reset.
        assert_eq!(agent.score(), 10);
        assert!(agent.q_value(Position::new(2, 1), Direction::Down) > 0.0);
    }

    #[test]
    fn step_never_picks_an_excluded_direction() {
        let maze = open_3x3();
        let mut agent = agent_for(&maze);

        // Exhaust the two invalid directions at the corner.
        agent.apply_direction(&maze, Direction::Up);
        agent.apply_direction(&maze, Direction::Left);

        for _ in 0..100 {
            let record = agent.step(&maze).unwrap();
            assert!(record.valid, "corner tile has only valid directions left");
            // Walk back to the corner for the next iteration.
            while agent.position() != Position::new(0, 0) {
                let pos = agent.position();
                let dir = if pos.x > 0 { Direction::Left } else { Direction::Up };
                agent.apply_direction(&maze, dir);
            }
        }
    }

    #[test]
    fn blocked_start_is_rejected() {
        let maze = Maze::from_rows(vec![vec![-1, 0], vec![0, 5]]).unwrap();
        let config = SimulationConfig::new();
        assert!(Agent::new(&maze, &config).is_err());
    }

    #[test]
    fn seeded_agents_are_deterministic() {
        let maze = open_3x3();
        let mut a = agent_for(&maze);
        let mut b = agent_for(&maze);

        for _ in 0..50 {
            let ra = a.step(&maze).unwrap();
            let rb = b.step(&maze).unwrap();
            assert_eq!(ra, rb);
        }
    }
}
