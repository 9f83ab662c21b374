//! Route configuration for the docfinder HTTP API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod directory_routes;

pub use directory_routes::create_routes;
