//! Common test utilities for HTTP API testing.
//!
//! - [`harness`] - Test server harness
//! - [`fixtures`] - Test doctors
//! - [`assertions`] - HTTP response assertions

pub mod assertions;
pub mod fixtures;
pub mod harness;
