//! View models.
//!
//! Stateless projections of doctors and filter state into display-ready
//! values. They hold no logic beyond formatting.

// Fields are display values named after what they render
#![allow(missing_docs)]

use serde::Serialize;

use crate::autocomplete::AutocompleteState;
use crate::model::Doctor;
use crate::state::{ConsultationModeFilter, FilterState, SortBy};

/// Card image fallback.
pub const CARD_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/80";
/// Suggestion thumbnail fallback.
pub const SUGGESTION_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/40";
/// Label of the inert booking action.
pub const BOOK_ACTION_LABEL: &str = "Book Appointment";

fn image_or(image: &str, placeholder: &str) -> String {
    if image.is_empty() {
        placeholder.to_string()
    } else {
        image.to_string()
    }
}

/// One doctor, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorCard {
    pub id: String,
    pub name: String,
    pub image: String,
    /// Specialties joined with `", "`.
    pub specialty: String,
    pub qualifications: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_qualification: Option<String>,
    /// e.g. `"13 yrs exp."`.
    pub experience: String,
    /// e.g. `"₹ 500"`.
    pub fee: String,
    pub clinic: String,
    pub location: String,
    /// Always shown, never wired to anything.
    pub book_action: &'static str,
}

impl From<&Doctor> for DoctorCard {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            image: image_or(&doctor.image, CARD_PLACEHOLDER_IMAGE),
            specialty: doctor.specialty.join(", "),
            qualifications: doctor.qualifications.clone(),
            additional_qualification: doctor
                .additional_qualification
                .clone()
                .filter(|q| !q.is_empty()),
            experience: format!("{} yrs exp.", doctor.experience),
            fee: format!("₹ {}", doctor.fees),
            clinic: doctor.clinic.clone(),
            location: doctor.location.clone(),
            book_action: BOOK_ACTION_LABEL,
        }
    }
}

/// What the result area shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DoctorListing {
    /// The feed is still being fetched.
    Loading,
    /// Nothing matched.
    Empty {
        title: &'static str,
        hint: &'static str,
    },
    /// Matching doctors.
    Doctors { cards: Vec<DoctorCard> },
}

impl DoctorListing {
    /// Builds the listing for a finished result list.
    pub fn render(doctors: &[Doctor]) -> Self {
        if doctors.is_empty() {
            DoctorListing::Empty {
                title: "No doctors found",
                hint: "Try adjusting your filters or search term",
            }
        } else {
            DoctorListing::Doctors {
                cards: doctors.iter().map(DoctorCard::from).collect(),
            }
        }
    }

    /// Number of cards shown.
    pub fn len(&self) -> usize {
        match self {
            DoctorListing::Doctors { cards } => cards.len(),
            _ => 0,
        }
    }

    /// Returns true when no card is shown.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A radio option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioOption {
    pub value: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// A specialty checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialtyOption {
    pub name: String,
    pub checked: bool,
    pub test_id: String,
}

/// The filter sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPanel {
    pub sort: Vec<RadioOption>,
    pub specialties: Vec<SpecialtyOption>,
    pub consultation_mode: Vec<RadioOption>,
}

impl FilterPanel {
    /// Builds the sidebar for `universe` with `filters` selected.
    ///
    /// Selected specialties missing from `universe` are not shown.
    pub fn build(universe: &[String], filters: &FilterState) -> Self {
        let sort = [
            (SortBy::Fees, "Price: Low-High"),
            (SortBy::Experience, "Experience: Most Experience first"),
        ]
        .into_iter()
        .map(|(value, label)| RadioOption {
            value: value.as_param(),
            label,
            checked: filters.sort_by == value,
        })
        .collect();

        let specialties = universe
            .iter()
            .map(|name| SpecialtyOption {
                name: name.clone(),
                checked: filters.specialties.contains(name),
                test_id: format!("filter-specialty-{}", name.replacen('/', "-", 1)),
            })
            .collect();

        let consultation_mode = [
            (ConsultationModeFilter::VideoConsult, "Video Consultation"),
            (ConsultationModeFilter::InClinic, "In-clinic Consultation"),
            (ConsultationModeFilter::Any, "All"),
        ]
        .into_iter()
        .map(|(value, label)| RadioOption {
            value: value.as_param(),
            label,
            checked: filters.consultation_mode == value,
        })
        .collect();

        Self {
            sort,
            specialties,
            consultation_mode,
        }
    }
}

/// One autocomplete row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub image: String,
}

impl From<&Doctor> for Suggestion {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            specialty: doctor.specialty.join(", "),
            image: image_or(&doctor.image, SUGGESTION_PLACEHOLDER_IMAGE),
        }
    }
}

/// The suggestion dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionList {
    pub state: AutocompleteState,
    pub suggestions: Vec<Suggestion>,
}

impl SuggestionList {
    /// Builds the dropdown from matcher output. Open iff non-empty.
    pub fn render(doctors: &[Doctor]) -> Self {
        let state = if doctors.is_empty() {
            AutocompleteState::Closed
        } else {
            AutocompleteState::Open
        };
        Self {
            state,
            suggestions: doctors.iter().map(Suggestion::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Doctor {
        Doctor {
            id: "9".to_string(),
            name: "Dr. Ravi".to_string(),
            specialty: vec!["Dentist".to_string(), "Orthodontist".to_string()],
            experience: 13,
            fees: 500,
            ..Default::default()
        }
    }

    #[test]
    fn test_card_formatting() {
        let card = DoctorCard::from(&sample());
        assert_eq!(card.specialty, "Dentist, Orthodontist");
        assert_eq!(card.experience, "13 yrs exp.");
        assert_eq!(card.fee, "₹ 500");
        assert_eq!(card.image, CARD_PLACEHOLDER_IMAGE);
        assert_eq!(card.book_action, "Book Appointment");
        assert!(card.additional_qualification.is_none());
    }

    #[test]
    fn test_listing_states() {
        assert!(matches!(DoctorListing::render(&[]), DoctorListing::Empty { .. }));
        let listing = DoctorListing::render(&[sample()]);
        assert_eq!(listing.len(), 1);

        let json = serde_json::to_value(DoctorListing::Loading).unwrap();
        assert_eq!(json["state"], "loading");
    }

    #[test]
    fn test_filter_panel_checks_selection() {
        let universe = vec!["Dentist".to_string(), "Ear/Nose/Throat".to_string()];
        let filters = FilterState {
            specialties: ["Ear/Nose/Throat", "Stale"].into_iter().collect(),
            sort_by: SortBy::Experience,
            ..Default::default()
        };
        let panel = FilterPanel::build(&universe, &filters);

        assert_eq!(panel.specialties.len(), 2);
        assert!(!panel.specialties[0].checked);
        assert!(panel.specialties[1].checked);
        assert_eq!(panel.specialties[1].test_id, "filter-specialty-Ear-Nose/Throat");

        assert!(!panel.sort[0].checked);
        assert!(panel.sort[1].checked);

        let all = panel.consultation_mode.iter().find(|o| o.label == "All").unwrap();
        assert!(all.checked);
        assert_eq!(all.value, "");
    }

    #[test]
    fn test_suggestion_list() {
        let list = SuggestionList::render(&[sample()]);
        assert_eq!(list.state, AutocompleteState::Open);
        assert_eq!(list.suggestions[0].image, SUGGESTION_PLACEHOLDER_IMAGE);
        assert_eq!(SuggestionList::render(&[]).state, AutocompleteState::Closed);
    }
}
