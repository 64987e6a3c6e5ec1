//! Run command - drive a headless simulation run

use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{
    cli::output::{print_kv, print_section, render_best_utilities, render_maze},
    config::{GoalPolicy, SimulationConfig},
    export::q_csv::write_q_values_csv_file,
    manager::EnvironmentManager,
    maze::Maze,
    observers::{JsonlObserver, ProgressObserver},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GoalPolicyArg {
    /// Keep going after reaching the goal
    Continue,
    /// Return the agent to its start tile after each goal entry
    Reset,
}

impl From<GoalPolicyArg> for GoalPolicy {
    fn from(arg: GoalPolicyArg) -> Self {
        match arg {
            GoalPolicyArg::Continue => GoalPolicy::Continue,
            GoalPolicyArg::Reset => GoalPolicy::ResetToStart,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Run a headless simulation", allow_negative_numbers = true)]
pub struct RunArgs {
    /// Number of simulation steps
    #[arg(long, short = 's', default_value_t = 10_000)]
    pub steps: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Learning rate α
    #[arg(long, default_value_t = 0.5)]
    pub learning_rate: f64,

    /// Discount factor γ
    #[arg(long, default_value_t = 0.9)]
    pub discount_factor: f64,

    /// Utility target for invalid move attempts
    #[arg(long, default_value_t = -10.0)]
    pub penalty: f64,

    /// What happens when the agent reaches the goal
    #[arg(long, value_enum, default_value = "reset")]
    pub goal_policy: GoalPolicyArg,

    /// Pacing multiplier (1-3, higher is faster)
    #[arg(long, default_value_t = 1)]
    pub time_factor: u32,

    /// Inter-step delay in milliseconds at time factor 1 (0 = free-running)
    #[arg(long, default_value_t = 0)]
    pub step_delay_ms: u64,

    /// Optional file for JSONL move observations
    #[arg(long)]
    pub observations: Option<PathBuf>,

    /// Optional CSV file for the learned utility table
    #[arg(long)]
    pub q_values: Option<PathBuf>,

    /// Suppress the progress bar and the final rendering
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

pub fn execute(args: RunArgs) -> Result<()> {
    let maze = Maze::default_layout();

    let mut config = SimulationConfig::new()
        .with_learning_rate(args.learning_rate)
        .with_discount_factor(args.discount_factor)
        .with_invalid_move_penalty(args.penalty)
        .with_goal_policy(args.goal_policy.into())
        .with_time_factor(args.time_factor)
        .with_base_step_delay(Duration::from_millis(args.step_delay_ms));
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;

    let mut manager = EnvironmentManager::new(maze, config)?;
    if !args.quiet {
        manager = manager.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.observations {
        manager = manager.with_observer(Box::new(JsonlObserver::new(path)?));
    }

    let summary = manager.run(args.steps)?;

    if let Some(path) = &args.q_values {
        write_q_values_csv_file(manager.agent().q_table(), path)?;
    }

    if !args.quiet {
        print_section("Run summary");
        print_kv("Steps", &summary.steps.to_string());
        print_kv("Valid moves", &summary.valid_moves.to_string());
        print_kv("Invalid moves", &summary.invalid_moves.to_string());
        print_kv("Goals reached", &summary.goals_reached.to_string());
        print_kv("Final score", &summary.final_score.to_string());
        print_kv("Final position", &summary.final_position.to_string());

        print_section("Maze");
        print!("{}", render_maze(manager.maze()));

        print_section("Best utility per tile");
        print!("{}", render_best_utilities(manager.maze(), manager.agent()));
    }

    Ok(())
}
