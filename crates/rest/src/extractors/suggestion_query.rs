//! Autocomplete query extractor.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct RawSuggestionQuery {
    #[serde(default)]
    q: String,
}

/// The partial name from `?q=`. A missing or malformed query is an empty
/// partial, which yields no suggestions.
#[derive(Debug, Clone, Default)]
pub struct SuggestionQuery {
    partial: String,
}

impl SuggestionQuery {
    /// Creates a query for `partial`.
    pub fn new(partial: impl Into<String>) -> Self {
        Self {
            partial: partial.into(),
        }
    }

    /// The partial name.
    pub fn partial(&self) -> &str {
        &self.partial
    }
}

impl<S> FromRequestParts<S> for SuggestionQuery
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Query::<RawSuggestionQuery>::from_request_parts(parts, state)
            .await
            .map(|Query(raw)| raw)
            .unwrap_or_default();
        Ok(SuggestionQuery::new(raw.q))
    }
}
