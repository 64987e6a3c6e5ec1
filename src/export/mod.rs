//! Export of learned utilities for external analysis.

pub mod q_csv;

pub use q_csv::write_q_values_csv;
