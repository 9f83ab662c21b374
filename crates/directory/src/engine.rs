//! Filter engine.
//!
//! Applies a [`FilterState`] to a doctor list. Predicates combine
//! conjunctively (search, then consultation mode, then specialties) and the
//! sort runs last. All sorts are stable, so ties keep feed order.

use crate::model::Doctor;
use crate::state::{ConsultationModeFilter, FilterState, SortBy};

/// Returns the doctors matching `filters`, in the requested order.
///
/// Pure and total: an empty input gives an empty output, and default filters
/// give a copy of the input in its original order.
pub fn apply(doctors: &[Doctor], filters: &FilterState) -> Vec<Doctor> {
    let needle = filters.search_term.to_lowercase();

    let mut result: Vec<Doctor> = doctors
        .iter()
        .filter(|doctor| needle.is_empty() || doctor.name_contains_lower(&needle))
        .filter(|doctor| matches_mode(doctor, filters.consultation_mode))
        .filter(|doctor| {
            filters.specialties.is_empty()
                || filters.specialties.iter().any(|s| doctor.has_specialty(s))
        })
        .cloned()
        .collect();

    sort_doctors(&mut result, filters.sort_by);
    result
}

/// Returns true if `doctor` offers the selected consultation mode.
pub fn matches_mode(doctor: &Doctor, mode: ConsultationModeFilter) -> bool {
    match mode {
        ConsultationModeFilter::Any => true,
        ConsultationModeFilter::VideoConsult => doctor.consultation_mode.video_consult,
        ConsultationModeFilter::InClinic => doctor.consultation_mode.in_clinic,
    }
}

/// Stable in-place sort.
pub fn sort_doctors(doctors: &mut [Doctor], sort_by: SortBy) {
    match sort_by {
        SortBy::Unsorted => {}
        SortBy::Fees => doctors.sort_by_key(|d| d.fees),
        SortBy::Experience => doctors.sort_by(|a, b| b.experience.cmp(&a.experience)),
    }
}
