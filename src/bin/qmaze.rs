//! qmaze CLI - headless driver for the Q-learning maze simulation
//!
//! This CLI provides a unified interface for:
//! - Running a simulation with configurable learning parameters
//! - Exporting move traces (JSONL) and learned utilities (CSV)
//! - Inspecting the built-in maze layout

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qmaze")]
#[command(version, about = "Tabular Q-learning maze simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless simulation
    Run(qmaze::cli::commands::run::RunArgs),

    /// Print the built-in maze layout
    Layout(qmaze::cli::commands::layout::LayoutArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => qmaze::cli::commands::run::execute(args),
        Commands::Layout(args) => qmaze::cli::commands::layout::execute(args),
    }
}
