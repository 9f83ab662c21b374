//! Common test utilities for directory integration tests.
//!
//! - [`fixtures`] - Doctor builders and canned feed payloads

pub mod fixtures;
