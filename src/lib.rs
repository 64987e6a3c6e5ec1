//! Tabular Q-learning maze simulation
//!
//! This crate provides:
//! - An immutable maze environment with per-tile reward/blocked values
//! - A single Q-learning agent with per-tile exclusion strategies
//! - A session object orchestrating the step loop and pacing
//! - An observer boundary for headless presentation and data export

pub mod agent;
pub mod cli;
pub mod config;
pub mod control;
pub mod error;
pub mod export;
pub mod manager;
pub mod maze;
pub mod observers;
pub mod ports;
pub mod q_learning;
pub mod strategy;
pub mod types;

pub use agent::{Agent, MoveRecord};
pub use config::{GoalPolicy, SimulationConfig};
pub use control::SimulationControl;
pub use error::{Error, Result};
pub use manager::{EnvironmentManager, RunSummary};
pub use maze::Maze;
pub use q_learning::QTable;
pub use strategy::{Strategy, StrategyProfile};
pub use types::{Direction, Position};
