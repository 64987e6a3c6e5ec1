//! Error types for the qmaze crate

use thiserror::Error;

/// Main error type for the qmaze crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("all four directions are excluded at tile ({x}, {y}); the maze is malformed")]
    DeadEnd { x: i32, y: i32 },

    #[error("time factor {value} is out of range (must be {min}-{max})")]
    InvalidTimeFactor { value: u32, min: u32, max: u32 },

    #[error("invalid maze layout: {message}")]
    InvalidMazeLayout { message: String },

    #[error("learning rate {value} must be in (0, 1]")]
    InvalidLearningRate { value: f64 },

    #[error("discount factor {value} must be in [0, 1]")]
    InvalidDiscountFactor { value: f64 },

    #[error("invalid-move penalty {value} must be finite and non-positive")]
    InvalidPenalty { value: f64 },

    #[error("start position ({x}, {y}) is blocked or outside the maze")]
    InvalidStartPosition { x: i32, y: i32 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
