//! Test fixtures for HTTP API testing.
//!
//! Provides a small roster of doctors that exercises every filter.

#![allow(dead_code)]

use docfinder_directory::{ConsultationMode, Directory, Doctor};

/// Builder for test doctors.
#[derive(Debug, Clone)]
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
                qualifications: "MBBS".to_string(),
                clinic: "Test Clinic".to_string(),
                location: "Kothrud, Pune".to_string(),
                ..Default::default()
            },
        }
    }

    /// Sets the specialties.
    pub fn with_specialties(mut self, specialties: &[&str]) -> Self {
        self.doctor.specialty = specialties.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Sets fee and experience.
    pub fn with_terms(mut self, fees: u32, experience: u32) -> Self {
        self.doctor.fees = fees;
        self.doctor.experience = experience;
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

/// The roster, in feed order.
pub fn doctors() -> Vec<Doctor> {
    vec![
        DoctorFixture::new("101", "Dr. Aarav Mehta")
            .with_specialties(&["Cardiologist"])
            .with_terms(800, 15)
            .with_modes(true, true)
            .build(),
        DoctorFixture::new("102", "Dr. Priya Sharma")
            .with_specialties(&["Dentist", "Orthodontist"])
            .with_terms(400, 8)
            .with_modes(false, true)
            .build(),
        DoctorFixture::new("103", "Dr. Rahul Verma")
            .with_specialties(&["Dermatologist"])
            .with_terms(600, 20)
            .with_modes(true, false)
            .build(),
        DoctorFixture::new("104", "Dr. Ananya Rao")
            .with_specialties(&["Dentist"])
            .with_terms(300, 5)
            .with_modes(true, true)
            .build(),
        DoctorFixture::new("105", "Dr. Karan Singh")
            .with_specialties(&["General Physician", "Ear/Nose/Throat"])
            .with_terms(500, 12)
            .with_modes(false, true)
            .build(),
    ]
}

/// A directory over [`doctors`].
pub fn directory() -> Directory {
    Directory::from_doctors(doctors())
}
