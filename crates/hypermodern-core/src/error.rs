//! Error types for point statistics
//!
//! Provides a unified error type for the hypermodern crates.

use thiserror::Error;

/// Core error type for statistical operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// The statistic has no defined value for this input
    #[error("Undefined statistic: {0}")]
    UndefinedStatistic(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a zero-variance column
    pub fn zero_variance(context: &str) -> Self {
        Self::UndefinedStatistic(format!("{context} has zero variance"))
    }

    /// Whether this error means "no value" rather than a real failure
    pub fn is_undefined(&self) -> bool {
        matches!(
            self,
            Self::UndefinedStatistic(_) | Self::InsufficientData { .. }
        )
    }
}
