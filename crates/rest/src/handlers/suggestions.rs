//! Autocomplete handler.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use docfinder_directory::SuggestionList;
use tracing::debug;

use crate::extractors::SuggestionQuery;
use crate::state::AppState;

/// Handler for search box suggestions.
///
/// Returns at most three doctors whose name contains `q`, in feed order.
/// The dropdown is `open` exactly when there is at least one suggestion.
///
/// # HTTP Request
///
/// `GET [base]/suggestions?q=ana`
pub async fn suggestions_handler(
    State(state): State<AppState>,
    query: SuggestionQuery,
) -> Response {
    debug!(partial = %query.partial(), "Processing suggestion request");

    let mut session = state.session("");
    session.type_search(query.partial());
    let list = SuggestionList::render(session.autocomplete().suggestions());

    (StatusCode::OK, Json(list)).into_response()
}
