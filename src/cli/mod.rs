//! CLI infrastructure for the qmaze simulation
//!
//! This module provides the command-line interface for running headless
//! simulations and inspecting the built-in maze layout.

pub mod commands;
pub mod output;
