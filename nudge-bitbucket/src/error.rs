//! Error types for Bitbucket operations

use thiserror::Error;

/// Result type for Bitbucket operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during Bitbucket operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport or deserialization failure from the HTTP client
    #[error("Bitbucket HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the API
    #[error("Bitbucket API returned status {status} for {url}")]
    Api {
        /// The HTTP status received
        status: reqwest::StatusCode,
        /// The URL that was requested
        url: String,
    },
}
