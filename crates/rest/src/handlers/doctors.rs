//! Doctor listing handlers.
//!
//! Each request plays one page view: it hydrates a session from the query
//! string, optionally applies one intent, and returns the derived listing
//! together with the re-encoded query string.
//!
//! - `GET [base]/doctors?{filters}`
//! - `GET [base]/doctors/{id}`
//! - `POST [base]/doctors/_intent?{filters}`

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use docfinder_directory::{
    DirectorySession, DoctorCard, DoctorListing, FilterIntent, FilterState, Notice, query,
};
use serde::Serialize;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::FilterQuery;
use crate::state::AppState;

/// Body of a listing response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorsResponse {
    /// Canonical query string for the filters, without `?`.
    pub query: String,
    /// Shareable link to this listing.
    pub location: String,
    /// Number of matching doctors.
    pub total: usize,
    /// The filters in effect.
    pub filters: FilterState,
    /// The rendered result area.
    pub listing: DoctorListing,
    /// Load-failure notice, when the feed could not be fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl DoctorsResponse {
    /// Builds the response for the session's current filters.
    pub fn from_session(session: &DirectorySession, base_url: &str) -> Self {
        let results = session.results();
        let filters = session.filters().clone();
        Self {
            query: session.query_string(),
            location: query::location(&format!("{}/doctors", base_url), &filters),
            total: results.len(),
            filters,
            listing: DoctorListing::render(&results),
            notice: session.directory().notice().cloned(),
        }
    }
}

/// Handler for the doctor listing.
///
/// # HTTP Request
///
/// `GET [base]/doctors?search=&mode=&specialties=&sort=`
///
/// # Response
///
/// - `200 OK` - Always; an unavailable feed yields an empty listing with a notice
pub async fn list_handler(State(state): State<AppState>, query: FilterQuery) -> RestResult<Response> {
    debug!(query = %query.raw(), "Processing doctor list request");

    let session = state.session(query.raw());
    let response = DoctorsResponse::from_session(&session, state.base_url());

    debug!(total = response.total, "Returning doctor list");
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Handler for a single doctor card.
///
/// # Response
///
/// - `200 OK` - The doctor card
/// - `404 Not Found` - No doctor with that id
pub async fn read_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> RestResult<Response> {
    debug!(id = %id, "Processing doctor read request");

    match state.directory().find(&id) {
        Some(doctor) => Ok((StatusCode::OK, Json(DoctorCard::from(doctor))).into_response()),
        None => {
            debug!(id = %id, "Doctor not found");
            Err(RestError::NotFound {
                resource: "Doctor".to_string(),
                id,
            })
        }
    }
}

/// Handler for a filter control action.
///
/// The query string carries the current filters; the body carries one
/// [`FilterIntent`]. The response describes the state after the intent.
///
/// # HTTP Request
///
/// ```http
/// POST /doctors/_intent?sort=fees HTTP/1.1
/// Content-Type: application/json
///
/// {"type": "toggleSpecialty", "value": "Dentist"}
/// ```
///
/// # Response
///
/// - `200 OK` - The listing for the new filters
/// - `400 Bad Request` - The body is not a valid intent
pub async fn intent_handler(
    State(state): State<AppState>,
    query: FilterQuery,
    body: Bytes,
) -> RestResult<Response> {
    let intent: FilterIntent = serde_json::from_slice(&body)?;
    debug!(query = %query.raw(), intent = ?intent, "Processing filter intent");

    let mut session = state.session(query.raw());
    session.dispatch(&intent);
    let response = DoctorsResponse::from_session(&session, state.base_url());

    Ok((StatusCode::OK, Json(response)).into_response())
}
