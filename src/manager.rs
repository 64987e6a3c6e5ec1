//! Session object orchestrating one simulation run.
//!
//! The manager owns the maze, the agent, the observer list, and the shared
//! run-control handle; there is no ambient global state. It never computes
//! learning logic itself - it drives the agent's step loop and relays each
//! executed move outward.

use std::{thread, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    agent::{Agent, MoveRecord},
    config::SimulationConfig,
    control::SimulationControl,
    maze::Maze,
    ports::Observer,
    types::Position,
};

/// How long the step loop sleeps between pause-flag polls while suspended.
const PAUSE_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Aggregate result of a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Steps executed (valid and invalid attempts both count)
    pub steps: usize,
    /// Moves that entered a tile
    pub valid_moves: usize,
    /// Attempts rejected by the maze
    pub invalid_moves: usize,
    /// Times the goal tile was entered
    pub goals_reached: usize,
    /// Cumulative score at the end of the run
    pub final_score: i64,
    /// Agent position at the end of the run
    pub final_position: Position,
}

/// Orchestrates one simulation run: constructs the agent, drives its step
/// loop, and forwards move events to the observers.
pub struct EnvironmentManager {
    maze: Maze,
    agent: Agent,
    base_step_delay: Duration,
    control: SimulationControl,
    observers: Vec<Box<dyn Observer>>,
    steps_executed: usize,
}

impl EnvironmentManager {
    /// Construct the session from a maze and configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when parameters are out of range or the
    /// start tile is blocked.
    pub fn new(maze: Maze, config: SimulationConfig) -> Result<Self> {
        let agent = Agent::new(&maze, &config)?;
        let control = SimulationControl::new(config.time_factor)?;
        Ok(EnvironmentManager {
            maze,
            agent,
            base_step_delay: config.base_step_delay,
            control,
            observers: Vec::new(),
            steps_executed: 0,
        })
    }

    /// Add an observer to the session.
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// A handle to the shared run control, for the presentation side.
    pub fn control(&self) -> SimulationControl {
        self.control.clone()
    }

    /// Set the pacing multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTimeFactor`] for values outside `1..=3`;
    /// the prior factor remains in effect.
    pub fn set_time_factor(&self, value: u32) -> Result<()> {
        self.control.set_time_factor(value)
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Run the step loop for `steps` steps.
    ///
    /// A continuous simulation is this loop with a large step count; a
    /// bounded count keeps headless runs and tests finite. Before each step
    /// the pause flag is polled, so pausing takes
    /// effect within one step. After each step the move event is forwarded to
    /// every observer and the loop sleeps `base_step_delay / time_factor`
    /// (a higher time factor means faster stepping).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DeadEnd`] when the agent's current tile has
    /// every direction excluded. Observer failures are not errors: the
    /// offending observer is warned about and dropped.
    pub fn run(&mut self, steps: usize) -> Result<RunSummary> {
        let mut summary = RunSummary {
            steps: 0,
            valid_moves: 0,
            invalid_moves: 0,
            goals_reached: 0,
            final_score: self.agent.score(),
            final_position: self.agent.position(),
        };

        notify(&mut self.observers, |observer| {
            observer.on_run_start(steps)
        });

        for _ in 0..steps {
            while self.control.is_paused() {
                thread::sleep(PAUSE_POLL_INTERVAL);
            }

            let record = self.agent.step(&self.maze)?;
            record_step(&mut summary, &record);
            summary.final_score = record.score;
            summary.final_position = self.agent.position();

            let step_num = self.steps_executed;
            self.steps_executed += 1;
            notify(&mut self.observers, |observer| {
                observer.on_move(step_num, &record)
            });

            self.sleep_between_steps();
        }

        notify(&mut self.observers, |observer| {
            observer.on_run_end(&summary)
        });

        Ok(summary)
    }

    /// Execute a single externally chosen move, relaying it to the observers.
    ///
    /// This is the coordination point used by scripted runs: the learning
    /// logic stays inside the agent, the manager only forwards the result.
    pub fn execute_move(&mut self, direction: crate::types::Direction) -> MoveRecord {
        let record = self.agent.apply_direction(&self.maze, direction);
        let step_num = self.steps_executed;
        self.steps_executed += 1;
        notify(&mut self.observers, |observer| {
            observer.on_move(step_num, &record)
        });
        record
    }

    fn sleep_between_steps(&self) {
        if self.base_step_delay.is_zero() {
            return;
        }
        let factor = self.control.time_factor();
        thread::sleep(self.base_step_delay / factor);
    }
}

fn record_step(summary: &mut RunSummary, record: &MoveRecord) {
    summary.steps += 1;
    if record.valid {
        summary.valid_moves += 1;
    } else {
        summary.invalid_moves += 1;
    }
    if record.reached_goal {
        summary.goals_reached += 1;
    }
}

/// Deliver an event to every observer, dropping any that fails.
///
/// Presentation-side failures must never stall the step loop, so delivery is
/// fire-and-forget: the first error an observer returns is reported once and
/// the observer is removed for the rest of the run.
fn notify<F>(observers: &mut Vec<Box<dyn Observer>>, mut deliver: F)
where
    F: FnMut(&mut Box<dyn Observer>) -> Result<()>,
{
    let mut idx = 0;
    while idx < observers.len() {
        match deliver(&mut observers[idx]) {
            Ok(()) => idx += 1,
            Err(err) => {
                eprintln!("Warning: dropping observer after delivery failure: {err}");
                observers.remove(idx);
            }
        }
    }
}
