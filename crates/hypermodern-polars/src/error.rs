//! Error types for hypermodern-polars

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Statistics error: {0}")]
    Core(#[from] hypermodern_core::Error),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Type mismatch in column '{column}': expected {expected}, got {got}")]
    TypeMismatch {
        column: String,
        expected: String,
        got: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
