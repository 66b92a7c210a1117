//! Error types for toroid-core.

use thiserror::Error;

/// Errors that can occur while reading the startup grid.
#[derive(Debug, Error)]
pub enum SeedError {
    /// IO error from the seed stream.
    #[error("IO error while reading seed: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before every cell was populated.
    #[error("seed ended early: expected {expected} cells, found {found}")]
    Missing { expected: usize, found: usize },

    /// A token that is not an integer.
    #[error("malformed token {token:?} at row {row}, column {col}")]
    Malformed {
        row: usize,
        col: usize,
        token: String,
    },

    /// An integer other than 0 or 1.
    #[error("value {value} at row {row}, column {col} is not 0 or 1")]
    OutOfRange { row: usize, col: usize, value: i64 },
}
