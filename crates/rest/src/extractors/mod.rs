//! Axum extractors for directory requests.
//!
//! - [`FilterQuery`] - Filter state hydrated from the query string
//! - [`SuggestionQuery`] - The partial name typed into the search box

mod filter_query;
mod suggestion_query;

pub use filter_query::FilterQuery;
pub use suggestion_query::SuggestionQuery;
