//! Server configuration for the docfinder HTTP API.
//!
//! This module provides configuration types for the server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DOCFINDER_PORT` | 8080 | Server port |
//! | `DOCFINDER_HOST` | 127.0.0.1 | Host to bind |
//! | `DOCFINDER_LOG_LEVEL` | info | Log level |
//! | `DOCFINDER_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `DOCFINDER_ENABLE_CORS` | true | Enable CORS |
//! | `DOCFINDER_CORS_ORIGINS` | * | Allowed origins |
//! | `DOCFINDER_CORS_METHODS` | GET,POST,OPTIONS | Allowed methods |
//! | `DOCFINDER_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `DOCFINDER_SOURCE_URL` | hosted mock feed | Doctor feed URL |
//! | `DOCFINDER_FETCH_TIMEOUT` | 15 | Feed fetch timeout (seconds) |
//! | `DOCFINDER_BASE_URL` | http://localhost:8080 | Server base URL |
//!
//! # Example
//!
//! ```rust
//! use docfinder_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use clap::Parser;
use docfinder_directory::DEFAULT_SOURCE_URL;
use url::Url;

/// Server configuration for the docfinder HTTP API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "docfinder")]
#[command(about = "Doctor directory search server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "DOCFINDER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "DOCFINDER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "DOCFINDER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "DOCFINDER_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "DOCFINDER_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "DOCFINDER_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "DOCFINDER_CORS_METHODS", default_value = "GET,POST,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "DOCFINDER_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,

    /// URL of the doctor feed fetched at start-up.
    #[arg(long, env = "DOCFINDER_SOURCE_URL", default_value = DEFAULT_SOURCE_URL)]
    pub source_url: String,

    /// Feed fetch timeout in seconds.
    #[arg(long, env = "DOCFINDER_FETCH_TIMEOUT", default_value = "15")]
    pub fetch_timeout: u64,

    /// Base URL for the server (used in `location` links).
    #[arg(long, env = "DOCFINDER_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            fetch_timeout: 15,
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the base URL without a trailing slash.
    pub fn full_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.fetch_timeout == 0 {
            errors.push("Fetch timeout cannot be 0".to_string());
        }

        if let Err(e) = Url::parse(&self.source_url) {
            errors.push(format!("Invalid source URL '{}': {}", self.source_url, e));
        }

        if let Err(e) = Url::parse(&self.base_url) {
            errors.push(format!("Invalid base URL '{}': {}", self.base_url, e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            source_url: "http://127.0.0.1:0/doctors.json".to_string(),
            fetch_timeout: 2,
            base_url: "http://localhost:0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert!(config.enable_cors);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_full_base_url_trims_slash() {
        let config = ServerConfig {
            base_url: "https://doctors.example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.full_base_url(), "https://doctors.example.com");
    }

    #[test]
    fn test_validate_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("Port")));
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let config = ServerConfig {
            request_timeout: 0,
            fetch_timeout: 0,
            source_url: "not a url".to_string(),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("source URL")));
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert_eq!(config.request_timeout, 5);
    }
}
