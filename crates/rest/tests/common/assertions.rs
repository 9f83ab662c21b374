//! HTTP response assertions.

#![allow(dead_code)]

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status_code().as_u16();
    assert_eq!(
        actual, expected,
        "Expected status {}, got {}",
        expected, actual
    );
}

/// Asserts that the body is an error with the expected code.
pub fn assert_error_code(body: &Value, expected: &str) {
    let actual = body
        .pointer("/error/code")
        .and_then(|v| v.as_str())
        .unwrap_or("");
    assert_eq!(
        actual, expected,
        "Expected error code {}, got {}",
        expected, actual
    );
}

/// Returns the ids of the cards in a listing response, in order.
pub fn card_ids(body: &Value) -> Vec<String> {
    body.pointer("/listing/cards")
        .and_then(|v| v.as_array())
        .map(|cards| {
            cards
                .iter()
                .filter_map(|c| c.get("id").and_then(|id| id.as_str()))
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Asserts the listing shows exactly `expected`, in order.
pub fn assert_card_ids(body: &Value, expected: &[&str]) {
    let actual = card_ids(body);
    assert_eq!(actual, expected, "Unexpected listing order");
    assert_eq!(body["total"], expected.len(), "Unexpected total");
}
