//! Doctor feed sources.
//!
//! The directory is loaded once from a [`DoctorSource`]. The HTTP source
//! issues a single GET with no retry; callers decide what a failure means
//! (see [`crate::Directory::load`]).

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use crate::error::{DirectoryError, DirectoryResult};
use crate::model::Doctor;
use crate::normalize::{ApiDoctor, normalize_all};

/// The public mock feed the directory reads by default.
pub const DEFAULT_SOURCE_URL: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

/// Where the doctor list comes from.
#[async_trait]
pub trait DoctorSource: Send + Sync {
    /// Short name for logs and health output.
    fn source_name(&self) -> &'static str;

    /// Fetches and normalizes the full doctor list.
    async fn fetch(&self) -> DirectoryResult<Vec<Doctor>>;
}

/// Reads the feed over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDoctorSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpDoctorSource {
    /// Creates a source for `url` with a request timeout.
    pub fn new(url: &str, timeout: Duration) -> DirectoryResult<Self> {
        let url = Url::parse(url).map_err(|e| DirectoryError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("docfinder/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { client, url })
    }

    /// The feed URL.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl DoctorSource for HttpDoctorSource {
    fn source_name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self) -> DirectoryResult<Vec<Doctor>> {
        debug!(url = %self.url, "Fetching doctor feed");

        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let raw: Vec<ApiDoctor> = serde_json::from_slice(&body)?;
        let doctors = normalize_all(raw);

        info!(url = %self.url, count = doctors.len(), "Doctor feed loaded");
        Ok(doctors)
    }
}

/// Serves a fixed, already-normalized list.
#[derive(Debug, Clone, Default)]
pub struct StaticDoctorSource {
    doctors: Vec<Doctor>,
}

impl StaticDoctorSource {
    /// Creates a source over `doctors`.
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }
}

#[async_trait]
impl DoctorSource for StaticDoctorSource {
    fn source_name(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self) -> DirectoryResult<Vec<Doctor>> {
        Ok(self.doctors.clone())
    }
}
