//! Filter state: the complete, serializable description of what the user is
//! currently looking for.
//!
//! A [`FilterState`] is a plain value. Every user action produces a new value
//! through [`FilterState::with_intent`]; nothing mutates a state that the
//! filter engine is looking at.

use serde::{Deserialize, Serialize};

/// Consultation mode selector.
///
/// The parameter form is `""` (any), `videoConsult` or `inClinic`. Any other
/// string falls back to [`ConsultationModeFilter::Any`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConsultationModeFilter {
    /// No restriction.
    #[default]
    Any,
    /// Only doctors offering video consultations.
    VideoConsult,
    /// Only doctors offering in-clinic consultations.
    InClinic,
}

impl ConsultationModeFilter {
    /// Returns the query parameter value, `""` for [`Self::Any`].
    pub fn as_param(&self) -> &'static str {
        match self {
            ConsultationModeFilter::Any => "",
            ConsultationModeFilter::VideoConsult => "videoConsult",
            ConsultationModeFilter::InClinic => "inClinic",
        }
    }

    /// Parses a query parameter value. Unknown values mean "any".
    pub fn from_param(value: &str) -> Self {
        match value {
            "videoConsult" => ConsultationModeFilter::VideoConsult,
            "inClinic" => ConsultationModeFilter::InClinic,
            _ => ConsultationModeFilter::Any,
        }
    }

    /// Returns true if this is the default selector.
    pub fn is_any(&self) -> bool {
        matches!(self, ConsultationModeFilter::Any)
    }
}

impl From<String> for ConsultationModeFilter {
    fn from(value: String) -> Self {
        Self::from_param(&value)
    }
}

impl From<ConsultationModeFilter> for String {
    fn from(value: ConsultationModeFilter) -> Self {
        value.as_param().to_string()
    }
}

/// Result ordering.
///
/// The parameter form is `""` (source order), `fees` or `experience`. Any
/// other string falls back to [`SortBy::Unsorted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortBy {
    /// Keep feed order.
    #[default]
    Unsorted,
    /// Cheapest first.
    Fees,
    /// Most experienced first.
    Experience,
}

impl SortBy {
    /// Returns the query parameter value, `""` for [`Self::Unsorted`].
    pub fn as_param(&self) -> &'static str {
        match self {
            SortBy::Unsorted => "",
            SortBy::Fees => "fees",
            SortBy::Experience => "experience",
        }
    }

    /// Parses a query parameter value. Unknown values mean "no sort".
    pub fn from_param(value: &str) -> Self {
        match value {
            "fees" => SortBy::Fees,
            "experience" => SortBy::Experience,
            _ => SortBy::Unsorted,
        }
    }

    /// Returns true if this is the default ordering.
    pub fn is_unsorted(&self) -> bool {
        matches!(self, SortBy::Unsorted)
    }
}

impl From<String> for SortBy {
    fn from(value: String) -> Self {
        Self::from_param(&value)
    }
}

impl From<SortBy> for String {
    fn from(value: SortBy) -> Self {
        value.as_param().to_string()
    }
}

/// Selected specialty names.
///
/// Duplicate-free and insertion-ordered, so the encoded query string is
/// stable. Matching only cares about membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SpecialtySet {
    names: Vec<String>,
}

impl SpecialtySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of selected specialties.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if `name` is selected.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Appends `name` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Removes `name`. Returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Removes `name` if selected, appends it otherwise.
    pub fn toggle(&mut self, name: &str) {
        if !self.remove(name) {
            self.names.push(name.to_string());
        }
    }

    /// Iterates over the selected names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the names as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Compares membership only, ignoring order.
    pub fn same_members(&self, other: &SpecialtySet) -> bool {
        self.len() == other.len() && self.iter().all(|n| other.contains(n))
    }
}

impl<S: Into<String>> FromIterator<S> for SpecialtySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SpecialtySet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl From<Vec<String>> for SpecialtySet {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<SpecialtySet> for Vec<String> {
    fn from(set: SpecialtySet) -> Self {
        set.names
    }
}

/// The user's current search, filter and sort intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// Raw search text, matched as a case-insensitive substring of the name.
    pub search_term: String,
    /// Consultation mode restriction.
    pub consultation_mode: ConsultationModeFilter,
    /// Selected specialties (OR semantics).
    pub specialties: SpecialtySet,
    /// Result ordering.
    pub sort_by: SortBy,
}

impl FilterState {
    /// Returns the default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when every field holds its default.
    pub fn is_default(&self) -> bool {
        self.search_term.is_empty()
            && self.consultation_mode.is_any()
            && self.specialties.is_empty()
            && self.sort_by.is_unsorted()
    }

    /// Equality with `specialties` compared by membership.
    pub fn equivalent(&self, other: &FilterState) -> bool {
        self.search_term == other.search_term
            && self.consultation_mode == other.consultation_mode
            && self.sort_by == other.sort_by
            && self.specialties.same_members(&other.specialties)
    }

    /// Produces the state that follows `intent`. `self` is left untouched.
    pub fn with_intent(&self, intent: &FilterIntent) -> FilterState {
        let mut next = self.clone();
        match intent {
            FilterIntent::Search(term) => next.search_term = term.clone(),
            FilterIntent::ToggleSpecialty(name) => next.specialties.toggle(name),
            FilterIntent::SetConsultationMode(mode) => next.consultation_mode = *mode,
            FilterIntent::SetSort(sort) => next.sort_by = *sort,
            FilterIntent::Reset => next = FilterState::default(),
        }
        next
    }
}

/// A discrete user action on the filter controls.
///
/// JSON form: `{"type": "toggleSpecialty", "value": "Dentist"}`,
/// `{"type": "reset"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum FilterIntent {
    /// Commit a search term (search submit or suggestion pick).
    Search(String),
    /// Check or uncheck a specialty.
    ToggleSpecialty(String),
    /// Pick a consultation mode radio.
    SetConsultationMode(ConsultationModeFilter),
    /// Pick a sort radio.
    SetSort(SortBy),
    /// Clear everything.
    Reset,
}
