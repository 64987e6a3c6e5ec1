//! Observer port - the one-way event contract toward the presentation side.
//!
//! The step loop forwards every executed move outward through this trait.
//! Delivery is fire-and-forget from the core's perspective: a failing
//! observer is dropped by the manager and can never stall the simulation.

use crate::{Result, agent::MoveRecord, manager::RunSummary};

/// Observer trait for monitoring a simulation run.
///
/// Observers can be composed to collect different kinds of data during a run:
/// progress bars for user feedback, JSONL export for analysis, metrics for
/// evaluation.
///
/// # Event Sequence
///
/// 1. `on_run_start(total_steps)` - once at the beginning
/// 2. `on_move(step_num, record)` - after every executed step, valid or not
/// 3. `on_run_end(summary)` - once at the end
///
/// # Examples
///
/// ```no_run
/// use qmaze::{agent::MoveRecord, ports::Observer};
///
/// struct ScoreWatcher {
///     last_score: i64,
/// }
///
/// impl Observer for ScoreWatcher {
///     fn on_move(&mut self, _step_num: usize, record: &MoveRecord) -> qmaze::Result<()> {
///         self.last_score = record.score;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when the run starts.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to initialize observation state.
    fn on_run_start(&mut self, _total_steps: usize) -> Result<()> {
        Ok(())
    }

    /// Called after every executed step with the move event payload.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to observe moves.
    fn on_move(&mut self, _step_num: usize, _record: &MoveRecord) -> Result<()> {
        Ok(())
    }

    /// Called when the run ends.
    ///
    /// Use this to finalize outputs, close files, or display summaries.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to perform cleanup or final reporting.
    fn on_run_end(&mut self, _summary: &RunSummary) -> Result<()> {
        Ok(())
    }
}
