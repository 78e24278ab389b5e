use thiserror::Error;

/// Errors that can occur during statistical computations
#[derive(Error, Debug)]
pub enum StatsError {
    // Input validation errors
    #[error("Invalid sample size: {n} observations (need at least 2)")]
    InvalidSampleSize { n: usize },

    #[error("Length mismatch: x has {x_len} values, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    // Numerical errors
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Distribution error: {0}")]
    Distribution(String),
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
