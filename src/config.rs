//! Configuration for simulation runs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    control::{MAX_TIME_FACTOR, MIN_TIME_FACTOR},
    error::Error,
    types::Position,
};

/// Default learning rate α.
pub const DEFAULT_LEARNING_RATE: f64 = 0.5;

/// Default discount factor γ.
pub const DEFAULT_DISCOUNT_FACTOR: f64 = 0.9;

/// Default utility update target for an invalid move attempt.
pub const DEFAULT_INVALID_MOVE_PENALTY: f64 = -10.0;

/// Base inter-step delay at time factor 1.
pub const DEFAULT_BASE_STEP_DELAY: Duration = Duration::from_millis(300);

/// What happens when the agent enters the goal tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPolicy {
    /// The run continues from the goal tile; the simulation never resets.
    Continue,
    /// The agent is returned to its start tile after the move is recorded,
    /// keeping its learned utilities and exclusions (episodic learning).
    ResetToStart,
}

impl Default for GoalPolicy {
    fn default() -> Self {
        GoalPolicy::ResetToStart
    }
}

/// Configuration for a simulation run.
///
/// # Examples
///
/// ```
/// use qmaze::config::{GoalPolicy, SimulationConfig};
///
/// let config = SimulationConfig::new()
///     .with_seed(42)
///     .with_learning_rate(0.3)
///     .with_goal_policy(GoalPolicy::Continue);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Learning rate α in (0, 1]
    pub learning_rate: f64,
    /// Discount factor γ in [0, 1]
    pub discount_factor: f64,
    /// Utility update target applied when a move attempt is invalid
    pub invalid_move_penalty: f64,
    /// Behavior on reaching the goal tile
    pub goal_policy: GoalPolicy,
    /// Agent start tile
    pub start: Position,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Initial pacing multiplier (1..=3, higher is faster)
    pub time_factor: u32,
    /// Inter-step delay at time factor 1; zero makes the loop free-running
    pub base_step_delay: Duration,
}

impl SimulationConfig {
    /// Create a configuration with the default learning parameters.
    pub fn new() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            discount_factor: DEFAULT_DISCOUNT_FACTOR,
            invalid_move_penalty: DEFAULT_INVALID_MOVE_PENALTY,
            goal_policy: GoalPolicy::default(),
            start: Position::new(0, 0),
            seed: None,
            time_factor: MIN_TIME_FACTOR,
            base_step_delay: Duration::ZERO,
        }
    }

    /// Set the learning rate α.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the discount factor γ.
    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    /// Set the invalid-move penalty.
    pub fn with_invalid_move_penalty(mut self, penalty: f64) -> Self {
        self.invalid_move_penalty = penalty;
        self
    }

    /// Set the goal policy.
    pub fn with_goal_policy(mut self, policy: GoalPolicy) -> Self {
        self.goal_policy = policy;
        self
    }

    /// Set the agent's start tile.
    pub fn with_start(mut self, start: Position) -> Self {
        self.start = start;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the initial time factor.
    pub fn with_time_factor(mut self, time_factor: u32) -> Self {
        self.time_factor = time_factor;
        self
    }

    /// Set the base inter-step delay.
    pub fn with_base_step_delay(mut self, delay: Duration) -> Self {
        self.base_step_delay = delay;
        self
    }

    /// Validate parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns the corresponding configuration error when α, γ, the penalty,
    /// or the time factor lies outside its accepted range.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(Error::InvalidLearningRate {
                value: self.learning_rate,
            });
        }
        if !(0.0..=1.0).contains(&self.discount_factor) {
            return Err(Error::InvalidDiscountFactor {
                value: self.discount_factor,
            });
        }
        if !self.invalid_move_penalty.is_finite() || self.invalid_move_penalty > 0.0 {
            return Err(Error::InvalidPenalty {
                value: self.invalid_move_penalty,
            });
        }
        if !(MIN_TIME_FACTOR..=MAX_TIME_FACTOR).contains(&self.time_factor) {
            return Err(Error::InvalidTimeFactor {
                value: self.time_factor,
                min: MIN_TIME_FACTOR,
                max: MAX_TIME_FACTOR,
            });
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
