//! Directory route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Creates all directory API routes.
///
/// # Routes
///
/// ## Listing
/// - `GET /doctors` - Filtered, sorted doctor listing
/// - `POST /doctors/_intent` - Apply one filter intent
/// - `GET /doctors/{id}` - One doctor card
///
/// ## Controls
/// - `GET /suggestions` - Search box autocomplete
/// - `GET /specialties` - Specialty universe
/// - `GET /filters` - Filter panel
///
/// ## System
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // System routes
        .route("/health", get(handlers::health_handler))
        .route("/_liveness", get(handlers::health::liveness_handler))
        .route("/_readiness", get(handlers::health::readiness_handler))
        // Listing routes
        .route("/doctors", get(handlers::list_handler))
        .route("/doctors/_intent", post(handlers::intent_handler))
        .route("/doctors/{id}", get(handlers::read_handler))
        // Control routes
        .route("/suggestions", get(handlers::suggestions_handler))
        .route("/specialties", get(handlers::specialties_handler))
        .route("/filters", get(handlers::filters_handler))
        .with_state(state)
}
