//! Observer adapters for simulation runs
//!
//! Observers allow composable data collection during a run without coupling
//! the step loop to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    agent::MoveRecord,
    manager::RunSummary,
    ports::Observer,
};

/// Progress bar observer - shows run progress and the live score
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self { progress_bar: None }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_run_start(&mut self, total_steps: usize) -> Result<()> {
        let pb = ProgressBar::new(total_steps as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} steps (score: {msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_move(&mut self, step_num: usize, record: &MoveRecord) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(step_num as u64 + 1);
            pb.set_message(record.score.to_string());
        }
        Ok(())
    }

    fn on_run_end(&mut self, summary: &RunSummary) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(summary.final_score.to_string());
        }
        Ok(())
    }
}

/// Metrics observer - tracks aggregate run statistics
pub struct MetricsObserver {
    steps: usize,
    valid_moves: usize,
    invalid_moves: usize,
    goals_reached: usize,
    last_score: i64,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self {
            steps: 0,
            valid_moves: 0,
            invalid_moves: 0,
            goals_reached: 0,
            last_score: 0,
        }
    }

    /// Fraction of attempts the maze accepted
    pub fn valid_move_rate(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.valid_moves as f64 / self.steps as f64
        }
    }

    pub fn goals_reached(&self) -> usize {
        self.goals_reached
    }

    pub fn last_score(&self) -> i64 {
        self.last_score
    }

    /// Get a metrics summary
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            steps: self.steps,
            valid_moves: self.valid_moves,
            invalid_moves: self.invalid_moves,
            goals_reached: self.goals_reached,
            valid_move_rate: self.valid_move_rate(),
            final_score: self.last_score,
        }
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of run metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub steps: usize,
    pub valid_moves: usize,
    pub invalid_moves: usize,
    pub goals_reached: usize,
    pub valid_move_rate: f64,
    pub final_score: i64,
}

impl Observer for MetricsObserver {
    fn on_move(&mut self, _step_num: usize, record: &MoveRecord) -> Result<()> {
        self.steps += 1;
        if record.valid {
            self.valid_moves += 1;
        } else {
            self.invalid_moves += 1;
        }
        if record.reached_goal {
            self.goals_reached += 1;
        }
        self.last_score = record.score;
        Ok(())
    }
}

/// Observation of a single step, as serialized to JSONL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepObservation {
    /// Step number within the run
    pub step_num: usize,
    #[serde(flatten)]
    pub record: MoveRecord,
}

/// JSONL observer - exports one move event per line
pub struct JsonlObserver {
    writer: BufWriter<File>,
}

impl JsonlObserver {
    /// Create a new JSONL observer writing to `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl Observer for JsonlObserver {
    fn on_move(&mut self, step_num: usize, record: &MoveRecord) -> Result<()> {
        let observation = StepObservation {
            step_num,
            record: *record,
        };
        serde_json::to_writer(&mut self.writer, &observation)?;
        writeln!(&mut self.writer)?;
        Ok(())
    }

    fn on_run_end(&mut self, _summary: &RunSummary) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
