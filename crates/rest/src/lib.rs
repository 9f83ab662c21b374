//! # docfinder-rest - Doctor Directory HTTP API
//!
//! This crate exposes the doctor directory over HTTP. It plays the part of
//! the search page: every listing request hydrates the filter state from its
//! query string, runs the filter engine over the loaded directory, and
//! returns the rendered listing together with the canonical query string to
//! put in the address bar.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docfinder_directory::{Directory, HttpDoctorSource};
//! use docfinder_rest::{ServerConfig, create_app_with_config};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::default();
//!     let source = HttpDoctorSource::new(&config.source_url, Duration::from_secs(15))?;
//!
//!     // Fetch once; a failed fetch yields an empty directory with a notice
//!     let directory = Directory::load(&source).await;
//!
//!     let app = create_app_with_config(directory, config);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | listing | GET | `/doctors?search=&mode=&specialties=&sort=` |
//! | intent | POST | `/doctors/_intent?{filters}` |
//! | read | GET | `/doctors/{id}` |
//! | autocomplete | GET | `/suggestions?q=` |
//! | specialties | GET | `/specialties` |
//! | filter panel | GET | `/filters?{filters}` |
//! | health | GET | `/health`, `/_liveness`, `/_readiness` |
//!
//! ## Query Parameters
//!
//! | Parameter | Values |
//! |-----------|--------|
//! | `search` | Case-insensitive substring of the doctor name |
//! | `mode` | `videoConsult` or `inClinic` |
//! | `specialties` | Comma-joined specialty names (OR semantics) |
//! | `sort` | `fees` (ascending) or `experience` (descending) |
//!
//! Unknown parameters are ignored and unknown values fall back to their
//! defaults, so listing requests never fail.
//!
//! ## Error Handling
//!
//! Errors are returned as `{"error": {"code", "message"}}`:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid | Malformed intent body |
//! | 404 | not-found | Unknown doctor id |
//! | 503 | unavailable | Doctor feed not loaded (readiness only) |
//! | 500 | exception | Internal server error |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (directory, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors for filter and autocomplete queries
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use axum::Router;
use docfinder_directory::Directory;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app(directory: Directory) -> Router {
    create_app_with_config(directory, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Arguments
///
/// * `directory` - The loaded doctor directory
/// * `config` - Server configuration
///
/// # Example
///
/// ```rust
/// use docfinder_directory::Directory;
/// use docfinder_rest::{create_app_with_config, ServerConfig};
///
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(Directory::default(), config);
/// ```
pub fn create_app_with_config(directory: Directory, config: ServerConfig) -> Router {
    info!(
        source = directory.source_name(),
        doctors = directory.len(),
        "Creating docfinder API server"
    );

    let state = AppState::new(directory, config.clone());

    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` takes
/// precedence over `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "docfinder={level},docfinder_rest={level},docfinder_directory={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
