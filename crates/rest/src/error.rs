//! Error types for the docfinder HTTP API.
//!
//! Every error is rendered as a JSON body with the matching HTTP status:
//!
//! ```json
//! { "error": { "code": "not-found", "message": "Doctor 42 not found" } }
//! ```
//!
//! | Error | HTTP Status | Code |
//! |-------|-------------|------|
//! | NotFound | 404 | not-found |
//! | BadRequest | 400 | invalid |
//! | ServiceUnavailable | 503 | unavailable |
//! | InternalError | 500 | exception |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use docfinder_directory::DirectoryError;
use std::fmt;

/// The primary error type for API operations.
#[derive(Debug)]
pub enum RestError {
    /// Resource not found (HTTP 404).
    NotFound {
        /// What was looked up (e.g., "Doctor").
        resource: String,
        /// The identifier.
        id: String,
    },

    /// Bad request (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// The doctor feed is not available (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            RestError::NotFound { .. } => "not-found",
            RestError::BadRequest { .. } => "invalid",
            RestError::ServiceUnavailable { .. } => "unavailable",
            RestError::InternalError { .. } => "exception",
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { resource, id } => {
                write!(f, "{} {} not found", resource, id)
            }
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let body = create_error_body(self.code(), &self.to_string());
        (self.status(), Json(body)).into_response()
    }
}

/// Creates the JSON error body.
fn create_error_body(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": code,
            "message": message
        }
    })
}

impl From<DirectoryError> for RestError {
    fn from(err: DirectoryError) -> Self {
        if err.is_remote() {
            RestError::ServiceUnavailable {
                message: err.to_string(),
            }
        } else {
            RestError::InternalError {
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::BadRequest {
            message: format!("Invalid JSON: {}", err),
        }
    }
}

/// Result type alias for API operations.
pub type RestResult<T> = Result<T, RestError>;
