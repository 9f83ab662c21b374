//! HTTP API test harness.

#![allow(dead_code)]

use axum_test::TestServer;
use docfinder_directory::{Directory, DoctorSource, StaticDoctorSource};
use docfinder_rest::{ServerConfig, create_app_with_config};

use super::fixtures;

/// Base URL used by every harness server.
pub const BASE_URL: &str = "http://docfinder.test";

/// Creates a test server over the fixture roster.
pub fn create_test_server() -> TestServer {
    create_test_server_with(fixtures::directory())
}

/// Creates a test server over `directory`.
pub fn create_test_server_with(directory: Directory) -> TestServer {
    let config = ServerConfig {
        base_url: BASE_URL.to_string(),
        ..ServerConfig::for_testing()
    };
    let app = create_app_with_config(directory, config);
    TestServer::new(app).expect("Failed to create test server")
}

/// A source that always fails, for load-failure tests.
pub struct UnreachableSource;

#[async_trait::async_trait]
impl DoctorSource for UnreachableSource {
    fn source_name(&self) -> &'static str {
        "unreachable"
    }

    async fn fetch(&self) -> docfinder_directory::DirectoryResult<Vec<docfinder_directory::Doctor>> {
        Err(docfinder_directory::DirectoryError::Status {
            status: 503,
            url: "http://feed.invalid/doctors.json".to_string(),
        })
    }
}

/// Creates a test server whose directory failed to load.
pub async fn create_unavailable_server() -> TestServer {
    create_test_server_with(Directory::load(&UnreachableSource).await)
}

/// Creates a test server loaded through the in-memory source.
pub async fn create_loaded_server() -> TestServer {
    let source = StaticDoctorSource::new(fixtures::doctors());
    create_test_server_with(Directory::load(&source).await)
}
