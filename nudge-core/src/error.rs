//! Error types for the reminder pipeline

use thiserror::Error;

/// Result type alias for Nudge core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Nudge core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error (identity directory source)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error, including missing required credentials
    #[error("Configuration error: {0}")]
    Config(String),
}
