//! Error types for toroid-terminal.

use thiserror::Error;
use toroid_core::{GridDims, SeedError};

/// Errors that can occur while running the simulator.
#[derive(Debug, Error)]
pub enum TermError {
    /// IO error from terminal operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The startup grid could not be read.
    #[error("invalid seed: {0}")]
    Seed(#[from] SeedError),

    /// The termination signal handler could not be registered.
    #[error("cannot install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),

    /// Seed grid does not match the configured dimensions.
    #[error("seed grid is {found}, expected {expected}")]
    DimensionMismatch { expected: GridDims, found: GridDims },
}
