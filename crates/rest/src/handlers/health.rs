//! Health check endpoint handlers.
//!
//! Provides health, liveness and readiness endpoints for monitoring and
//! load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Always answers `200 OK`. The status is `degraded` when the doctor feed
/// failed to load, and the load-failure notice is included.
///
/// # HTTP Request
///
/// `GET [base]/health`
pub async fn health_handler(State(state): State<AppState>) -> RestResult<Response> {
    debug!("Processing health check request");

    let directory = state.directory();
    let status = if directory.is_available() {
        "healthy"
    } else {
        "degraded"
    };

    let mut health_response = serde_json::json!({
        "status": status,
        "source": directory.source_name(),
        "doctors": directory.len(),
        "specialties": directory.specialties().len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });
    if let Some(notice) = directory.notice() {
        health_response["notice"] = serde_json::to_value(notice)?;
    }

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for the readiness probe.
///
/// # HTTP Request
///
/// `GET [base]/_readiness`
///
/// # Response
///
/// - `200 OK` - The doctor feed is loaded
/// - `503 Service Unavailable` - The doctor feed failed to load
pub async fn readiness_handler(State(state): State<AppState>) -> RestResult<Response> {
    debug!("Processing readiness check request");

    let directory = state.directory();
    if let Some(notice) = directory.notice() {
        return Err(RestError::ServiceUnavailable {
            message: notice.description.clone(),
        });
    }

    let response = serde_json::json!({
        "status": "ready",
        "source": directory.source_name(),
        "checks": {
            "directory": "ok"
        }
    });

    Ok((StatusCode::OK, Json(response)).into_response())
}
