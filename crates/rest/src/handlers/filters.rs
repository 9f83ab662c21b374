//! Filter panel handlers.
//!
//! - `GET [base]/specialties` - The sorted specialty universe
//! - `GET [base]/filters?{filters}` - The filter sidebar with the current selection

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use docfinder_directory::FilterPanel;
use tracing::debug;

use crate::extractors::FilterQuery;
use crate::state::AppState;

/// Handler for the specialty universe.
pub async fn specialties_handler(State(state): State<AppState>) -> Response {
    debug!("Processing specialties request");
    (StatusCode::OK, Json(state.directory().specialties())).into_response()
}

/// Handler for the filter sidebar.
///
/// Specialties are listed from the directory universe; a selected specialty
/// that no longer exists there is not shown but still applies to listings.
pub async fn filters_handler(State(state): State<AppState>, query: FilterQuery) -> Response {
    debug!(query = %query.raw(), "Processing filter panel request");

    let panel = FilterPanel::build(state.directory().specialties(), query.filters());
    (StatusCode::OK, Json(panel)).into_response()
}
