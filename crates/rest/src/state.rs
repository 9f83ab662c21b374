//! Application state for the docfinder HTTP API.
//!
//! The directory is loaded once before the server starts and never changes,
//! so handlers share it through an `Arc` without locking.

use std::sync::Arc;

use docfinder_directory::{Directory, DirectorySession};

use crate::config::ServerConfig;

/// Shared application state for the HTTP API.
///
/// # Example
///
/// ```rust
/// use docfinder_directory::Directory;
/// use docfinder_rest::{AppState, ServerConfig};
///
/// let state = AppState::new(Directory::default(), ServerConfig::default());
/// assert!(state.directory().is_empty());
/// ```
#[derive(Clone)]
pub struct AppState {
    /// The loaded doctor directory.
    directory: Arc<Directory>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Creates a new AppState with the given directory and configuration.
    pub fn new(directory: Directory, config: ServerConfig) -> Self {
        Self::with_shared(Arc::new(directory), config)
    }

    /// Creates a new AppState over an already shared directory.
    pub fn with_shared(directory: Arc<Directory>, config: ServerConfig) -> Self {
        Self {
            directory,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the directory.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Starts a session over the directory hydrated from `query`.
    pub fn session(&self, query: &str) -> DirectorySession {
        DirectorySession::from_query(Arc::clone(&self.directory), query)
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the base URL for the server.
    pub fn base_url(&self) -> &str {
        self.config.full_base_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docfinder_directory::Doctor;

    fn directory() -> Directory {
        Directory::from_doctors(vec![Doctor {
            id: "1".to_string(),
            name: "Dr. Test".to_string(),
            ..Default::default()
        }])
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(directory(), ServerConfig::default());
        assert_eq!(state.directory().len(), 1);
        assert_eq!(state.directory().source_name(), "memory");
    }

    #[test]
    fn test_app_state_config_access() {
        let config = ServerConfig {
            base_url: "https://doctors.example.com/".to_string(),
            ..Default::default()
        };
        let state = AppState::new(directory(), config);
        assert_eq!(state.base_url(), "https://doctors.example.com");
    }

    #[test]
    fn test_session_is_hydrated() {
        let state = AppState::new(directory(), ServerConfig::default());
        let session = state.session("sort=fees");
        assert!(session.is_hydrated());
        assert_eq!(session.query_string(), "sort=fees");
    }

    #[test]
    fn test_app_state_clone_shares_directory() {
        let state = AppState::new(directory(), ServerConfig::default());
        let cloned = state.clone();
        assert!(std::ptr::eq(state.directory(), cloned.directory()));
    }
}
