//! Doctor record normalizer.
//!
//! Converts records from the remote feed into [`Doctor`] values. Normalizing
//! never fails: missing fields take their defaults and unparseable numerals
//! become `0`, so a malformed record is kept rather than dropped.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};

use crate::model::{ConsultationMode, Doctor};

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("valid digit regex"));

/// A doctor record as served by the remote feed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiDoctor {
    /// Feed identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Photo URL.
    pub photo: String,
    /// Specialty entries.
    pub specialities: Vec<ApiSpeciality>,
    /// Text such as `"₹ 500"`.
    #[serde(deserialize_with = "loose_text")]
    pub fees: String,
    /// Text such as `"13 Years of experience"`.
    #[serde(deserialize_with = "loose_text")]
    pub experience: String,
    /// Spoken languages. Not used.
    pub languages: Vec<String>,
    /// Clinic details.
    pub clinic: ApiClinic,
    /// Offers video consultations.
    pub video_consult: bool,
    /// Offers in-clinic consultations.
    pub in_clinic: bool,
}

/// `specialities[]` entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiSpeciality {
    /// Specialty name.
    pub name: String,
}

/// `clinic` object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiClinic {
    /// Clinic name.
    pub name: String,
    /// Clinic address.
    pub address: ApiAddress,
}

/// `clinic.address` object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiAddress {
    /// Neighbourhood.
    pub locality: String,
    /// City.
    pub city: String,
}

/// Accepts a string, a number or null and yields its text.
fn loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Returns the first run of ASCII digits in `text`, or `0` when there is none
/// or it does not fit.
pub fn extract_number(text: &str) -> u32 {
    DIGIT_RUN
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Maps one feed record to a [`Doctor`].
pub fn normalize(raw: ApiDoctor) -> Doctor {
    let location = format!(
        "{}, {}",
        raw.clinic.address.locality, raw.clinic.address.city
    );

    Doctor {
        id: raw.id,
        name: raw.name,
        image: raw.photo,
        specialty: raw.specialities.into_iter().map(|s| s.name).collect(),
        // Not present in the feed.
        qualifications: String::new(),
        additional_qualification: None,
        experience: extract_number(&raw.experience),
        fees: extract_number(&raw.fees),
        clinic: raw.clinic.name,
        location,
        consultation_mode: ConsultationMode {
            video_consult: raw.video_consult,
            in_clinic: raw.in_clinic,
        },
    }
}

/// Maps a whole feed, keeping order.
pub fn normalize_all(raw: Vec<ApiDoctor>) -> Vec<Doctor> {
    raw.into_iter().map(normalize).collect()
}

/// Unique specialty names across `doctors`, sorted ascending.
pub fn all_specialties(doctors: &[Doctor]) -> Vec<String> {
    doctors
        .iter()
        .flat_map(|d| d.specialty.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_number() {
        assert_eq!(extract_number("13 Years of experience"), 13);
        assert_eq!(extract_number("₹ 500"), 500);
        assert_eq!(extract_number("no digits here"), 0);
        assert_eq!(extract_number(""), 0);
        assert_eq!(extract_number("between 5 and 9"), 5);
        assert_eq!(extract_number("99999999999999999999"), 0);
    }

    #[test]
    fn test_normalize_full_record() {
        let raw: ApiDoctor = serde_json::from_value(json!({
            "id": "111",
            "name": "Dr. Kshitija Jagdale",
            "photo": "https://example.test/p.jpg",
            "specialities": [{"name": "Dentist"}, {"name": "Orthodontist"}],
            "fees": "₹ 500",
            "experience": "13 Years of experience",
            "languages": ["English", "Hindi"],
            "clinic": {
                "name": "Smile Clinic",
                "address": {"locality": "Kothrud", "city": "Pune"}
            },
            "video_consult": true,
            "in_clinic": false
        }))
        .unwrap();

        let doctor = normalize(raw);
        assert_eq!(doctor.id, "111");
        assert_eq!(doctor.image, "https://example.test/p.jpg");
        assert_eq!(doctor.specialty, ["Dentist", "Orthodontist"]);
        assert_eq!(doctor.fees, 500);
        assert_eq!(doctor.experience, 13);
        assert_eq!(doctor.clinic, "Smile Clinic");
        assert_eq!(doctor.location, "Kothrud, Pune");
        assert!(doctor.qualifications.is_empty());
        assert!(doctor.consultation_mode.video_consult);
        assert!(!doctor.consultation_mode.in_clinic);
    }

    #[test]
    fn test_malformed_record_is_kept() {
        let raw: ApiDoctor = serde_json::from_value(json!({
            "id": "7",
            "name": "Dr. Sparse",
            "fees": null,
            "experience": 21
        }))
        .unwrap();

        let doctor = normalize(raw);
        assert_eq!(doctor.name, "Dr. Sparse");
        assert_eq!(doctor.fees, 0);
        assert_eq!(doctor.experience, 21);
        assert!(doctor.specialty.is_empty());
        assert_eq!(doctor.location, ", ");
    }

    #[test]
    fn test_all_specialties_sorted_unique() {
        let doctors = vec![
            Doctor {
                specialty: vec!["ENT".to_string(), "Dentist".to_string()],
                ..Default::default()
            },
            Doctor {
                specialty: vec!["Dentist".to_string(), "Cardiologist".to_string()],
                ..Default::default()
            },
        ];
        assert_eq!(all_specialties(&doctors), ["Cardiologist", "Dentist", "ENT"]);
    }
}
