//! Filter state extractor.
//!
//! Hydrates a [`FilterState`] from the raw request query string. Decoding
//! never fails: unknown parameters are ignored and unknown values fall back
//! to their defaults, so this extractor never rejects a request.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use docfinder_directory::{FilterState, decode};

/// Axum extractor for the filter query string.
///
/// # Example
///
/// ```rust,ignore
/// use docfinder_rest::extractors::FilterQuery;
///
/// async fn handler(query: FilterQuery) {
///     println!("sort = {:?}", query.filters().sort_by);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterQuery {
    raw: String,
    filters: FilterState,
}

impl FilterQuery {
    /// Decodes `raw` (with or without a leading `?`).
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.trim_start_matches('?').to_string(),
            filters: decode(raw),
        }
    }

    /// The query string as received.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The decoded filters.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }
}

impl<S> FromRequestParts<S> for FilterQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(FilterQuery::parse(parts.uri.query().unwrap_or("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use docfinder_directory::SortBy;

    #[test]
    fn test_parse_strips_question_mark() {
        let query = FilterQuery::parse("?sort=fees");
        assert_eq!(query.raw(), "sort=fees");
        assert_eq!(query.filters().sort_by, SortBy::Fees);
    }

    #[tokio::test]
    async fn test_extract_from_request() {
        let (mut parts, _) = Request::builder()
            .uri("/doctors?search=ali&specialties=Dentist,ENT")
            .body(())
            .unwrap()
            .into_parts();

        let query = FilterQuery::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(query.filters().search_term, "ali");
        assert_eq!(query.filters().specialties.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_query_is_default() {
        let (mut parts, _) = Request::builder()
            .uri("/doctors")
            .body(())
            .unwrap()
            .into_parts();

        let query = FilterQuery::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(query.filters().is_default());
        assert_eq!(query.raw(), "");
    }
}
