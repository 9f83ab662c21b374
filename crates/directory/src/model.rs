//! Canonical doctor record.

use serde::{Deserialize, Serialize};

/// How a doctor can be consulted. The two flags are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationMode {
    /// Offers video consultations.
    pub video_consult: bool,
    /// Offers in-clinic consultations.
    pub in_clinic: bool,
}

/// A practitioner as seen by the search core.
///
/// Only `name`, `specialty`, `experience`, `fees` and `consultation_mode`
/// take part in filtering; the remaining fields are carried for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name, matched case-insensitively.
    pub name: String,
    /// Photo URL, may be empty.
    pub image: String,
    /// Specialty names in feed order.
    pub specialty: Vec<String>,
    /// Free-text qualifications.
    pub qualifications: String,
    /// Optional secondary qualification line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_qualification: Option<String>,
    /// Years of experience.
    pub experience: u32,
    /// Consultation fee in currency units.
    pub fees: u32,
    /// Clinic name.
    pub clinic: String,
    /// "locality, city".
    pub location: String,
    /// Available consultation modes.
    pub consultation_mode: ConsultationMode,
}

impl Doctor {
    /// Returns true if the doctor lists the given specialty (exact match).
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialty.iter().any(|s| s == specialty)
    }

    /// Returns true if the lower-cased name contains `needle_lower`.
    ///
    /// The caller lower-cases the needle once per pass.
    pub(crate) fn name_contains_lower(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}
