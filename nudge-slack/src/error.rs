//! Error types for Slack delivery

use thiserror::Error;

/// Result type for Slack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during Slack delivery
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure from the HTTP client
    #[error("Slack HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the webhook
    #[error("Slack webhook returned status {status}")]
    Delivery {
        /// The HTTP status received
        status: reqwest::StatusCode,
    },
}
