//! Test fixtures for directory tests.
//!
//! Provides a doctor builder and a raw feed payload shaped like the remote
//! endpoint.

#![allow(dead_code)]

use docfinder_directory::{ConsultationMode, Doctor};
use serde_json::{Value, json};

/// Builder for test doctors.
#[derive(Debug, Clone, Default)]
pub struct DoctorFixture {
    doctor: Doctor,
}

impl DoctorFixture {
    /// Creates a doctor with an id and a name.
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            doctor: Doctor {
                id: id.to_string(),
                name: name.to_string(),
                ..Default::default()
            },
        }
    }

    /// Sets the fee.
    pub fn with_fees(mut self, fees: u32) -> Self {
        self.doctor.fees = fees;
        self
    }

    /// Sets the experience in years.
    pub fn with_experience(mut self, years: u32) -> Self {
        self.doctor.experience = years;
        self
    }

    /// Sets the specialties.
    pub fn with_specialties(mut self, specialties: &[&str]) -> Self {
        self.doctor.specialty = specialties.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Sets the consultation modes.
    pub fn with_modes(mut self, video_consult: bool, in_clinic: bool) -> Self {
        self.doctor.consultation_mode = ConsultationMode {
            video_consult,
            in_clinic,
        };
        self
    }

    /// Returns the doctor.
    pub fn build(self) -> Doctor {
        self.doctor
    }
}

/// Builds doctors that only differ by name.
pub fn named(names: &[&str]) -> Vec<Doctor> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| DoctorFixture::new(&format!("d{}", i + 1), name).build())
        .collect()
}

/// A mixed roster for combined filter tests.
pub fn roster() -> Vec<Doctor> {
    vec![
        DoctorFixture::new("1", "Dr. Aarav Mehta")
            .with_specialties(&["Cardiologist"])
            .with_fees(800)
            .with_experience(15)
            .with_modes(true, true)
            .build(),
        DoctorFixture::new("2", "Dr. Priya Sharma")
            .with_specialties(&["Dentist", "Orthodontist"])
            .with_fees(400)
            .with_experience(8)
            .with_modes(false, true)
            .build(),
        DoctorFixture::new("3", "Dr. Rahul Verma")
            .with_specialties(&["Dermatologist"])
            .with_fees(600)
            .with_experience(20)
            .with_modes(true, false)
            .build(),
        DoctorFixture::new("4", "Dr. Ananya Rao")
            .with_specialties(&["Dentist"])
            .with_fees(400)
            .with_experience(5)
            .with_modes(true, true)
            .build(),
        DoctorFixture::new("5", "Dr. Karan Singh")
            .with_specialties(&["General Physician", "Dermatologist"])
            .with_fees(300)
            .with_experience(12)
            .with_modes(false, true)
            .build(),
    ]
}

/// A feed payload in the remote format.
pub fn feed_payload() -> Value {
    json!([
        {
            "id": "111",
            "name": "Dr. Kshitija Jagdale",
            "photo": "https://example.test/1.jpg",
            "specialities": [{"name": "Dentist"}],
            "fees": "₹ 500",
            "experience": "13 Years of experience",
            "languages": ["English", "Marathi"],
            "clinic": {
                "name": "Smile Dental Care",
                "address": {"locality": "Kothrud", "city": "Pune"}
            },
            "video_consult": true,
            "in_clinic": true
        },
        {
            "id": "112",
            "name": "Dr. Ankit Desai",
            "photo": "",
            "specialities": [{"name": "General Physician"}, {"name": "Dentist"}],
            "fees": "₹ 350",
            "experience": "7 Years of experience",
            "languages": ["English"],
            "clinic": {
                "name": "City Clinic",
                "address": {"locality": "Andheri", "city": "Mumbai"}
            },
            "video_consult": false,
            "in_clinic": true
        },
        {
            "id": "113",
            "name": "Dr. Neha Kulkarni",
            "photo": "https://example.test/3.jpg",
            "specialities": [{"name": "Ayurveda"}],
            "fees": "Free consultation",
            "experience": "Fresher",
            "clinic": {
                "name": "Wellness Centre",
                "address": {"locality": "Baner", "city": "Pune"}
            },
            "video_consult": true,
            "in_clinic": false
        }
    ])
}
