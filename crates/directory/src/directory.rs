//! The loaded working set.
//!
//! A [`Directory`] is built once per process from a [`DoctorSource`] and is
//! immutable afterwards, so it can be shared behind an `Arc` without locks.

use serde::Serialize;
use tracing::{error, info};

use crate::autocomplete::suggest;
use crate::engine::apply;
use crate::model::Doctor;
use crate::normalize::all_specialties;
use crate::source::DoctorSource;
use crate::state::FilterState;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeSeverity {
    /// Informational.
    Default,
    /// Something failed.
    Destructive,
}

/// A transient, non-blocking message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Short heading.
    pub title: String,
    /// Message body.
    pub description: String,
    /// How it should be presented.
    pub variant: NoticeSeverity,
}

impl Notice {
    /// The notice shown when the doctor feed could not be loaded.
    pub fn load_failed() -> Self {
        Self {
            title: "Error".to_string(),
            description: "Failed to load doctor data. Please try again later.".to_string(),
            variant: NoticeSeverity::Destructive,
        }
    }
}

/// Doctors plus the specialty universe derived from them.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    doctors: Vec<Doctor>,
    specialties: Vec<String>,
    notice: Option<Notice>,
    source: &'static str,
}

impl Directory {
    /// Loads the directory from `source`.
    ///
    /// Never fails. On a fetch error the error is logged, the working set is
    /// empty and [`Directory::notice`] carries [`Notice::load_failed`].
    pub async fn load(source: &dyn DoctorSource) -> Self {
        match source.fetch().await {
            Ok(doctors) => {
                info!(
                    source = source.source_name(),
                    count = doctors.len(),
                    "Directory loaded"
                );
                Self {
                    source: source.source_name(),
                    ..Self::from_doctors(doctors)
                }
            }
            Err(e) => {
                error!(source = source.source_name(), error = %e, "Error fetching doctors");
                Self {
                    doctors: Vec::new(),
                    specialties: Vec::new(),
                    notice: Some(Notice::load_failed()),
                    source: source.source_name(),
                }
            }
        }
    }

    /// Builds a directory over an in-memory list.
    pub fn from_doctors(doctors: Vec<Doctor>) -> Self {
        let specialties = all_specialties(&doctors);
        Self {
            doctors,
            specialties,
            notice: None,
            source: "memory",
        }
    }

    /// All doctors in feed order.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Unique specialty names, sorted.
    pub fn specialties(&self) -> &[String] {
        &self.specialties
    }

    /// The load-failure notice, if loading failed.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Returns true when the feed loaded.
    pub fn is_available(&self) -> bool {
        self.notice.is_none()
    }

    /// Name of the source the directory came from.
    pub fn source_name(&self) -> &'static str {
        self.source
    }

    /// Number of doctors.
    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    /// Returns true when there are no doctors.
    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    /// Looks a doctor up by id.
    pub fn find(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    /// Runs the filter engine over the whole directory.
    pub fn search(&self, filters: &FilterState) -> Vec<Doctor> {
        apply(&self.doctors, filters)
    }

    /// Autocomplete suggestions for `partial`.
    pub fn suggest(&self, partial: &str) -> Vec<Doctor> {
        suggest(&self.doctors, partial)
    }
}
