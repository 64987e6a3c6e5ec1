//! Tabular Q-learning: the utility table and its temporal difference updates.

pub mod q_table;

pub use q_table::QTable;
