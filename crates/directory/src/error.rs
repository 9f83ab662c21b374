//! Error types for the doctor directory.
//!
//! The pure parts of the crate (filter engine, URL codec, autocomplete,
//! normalizer) never fail. Errors only arise at the remote feed boundary.

use thiserror::Error;

/// Errors raised while loading the doctor feed.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The HTTP request could not be sent or the body could not be read.
    #[error("request to doctor feed failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The feed answered with a non-success status.
    #[error("doctor feed {url} returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The feed URL.
        url: String,
    },

    /// The feed body was not a JSON array of doctor records.
    #[error("doctor feed returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured feed URL could not be parsed.
    #[error("invalid doctor feed URL '{url}': {message}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Parser message.
        message: String,
    },
}

impl DirectoryError {
    /// Returns true when the error came from the remote side rather than
    /// from local configuration.
    pub fn is_remote(&self) -> bool {
        !matches!(self, DirectoryError::InvalidUrl { .. })
    }
}

/// Result type alias for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
