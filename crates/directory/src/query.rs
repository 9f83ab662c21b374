//! URL codec.
//!
//! Maps a [`FilterState`] to and from a query string.
//!
//! # Parameters
//!
//! | Parameter | Field | Format |
//! |-----------|-------|--------|
//! | `search` | `search_term` | raw text |
//! | `mode` | `consultation_mode` | `videoConsult` or `inClinic` |
//! | `specialties` | `specialties` | comma-joined names |
//! | `sort` | `sort_by` | `fees` or `experience` |
//!
//! A parameter is only written when its field differs from the default.
//! Specialty names are joined with `,` without escaping, so a name that
//! itself contains a comma does not survive a round trip. Empty segments
//! are dropped on decode, so a blank specialty name (a feed record with an
//! unnamed speciality) encodes as `specialties=` and decodes to no
//! specialties at all.

use url::form_urlencoded;

use crate::state::{ConsultationModeFilter, FilterState, SortBy, SpecialtySet};

/// Search text parameter.
pub const SEARCH_PARAM: &str = "search";
/// Consultation mode parameter.
pub const MODE_PARAM: &str = "mode";
/// Selected specialties parameter.
pub const SPECIALTIES_PARAM: &str = "specialties";
/// Sort parameter.
pub const SORT_PARAM: &str = "sort";

/// Separator used inside the `specialties` value.
pub const SPECIALTY_SEPARATOR: &str = ",";

/// Encodes `filters` as a form-urlencoded query string without a leading `?`.
///
/// Returns an empty string for the default state.
pub fn encode(filters: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !filters.search_term.is_empty() {
        serializer.append_pair(SEARCH_PARAM, &filters.search_term);
    }
    if !filters.consultation_mode.is_any() {
        serializer.append_pair(MODE_PARAM, filters.consultation_mode.as_param());
    }
    if !filters.specialties.is_empty() {
        let joined = filters
            .specialties
            .iter()
            .collect::<Vec<_>>()
            .join(SPECIALTY_SEPARATOR);
        serializer.append_pair(SPECIALTIES_PARAM, &joined);
    }
    if !filters.sort_by.is_unsorted() {
        serializer.append_pair(SORT_PARAM, filters.sort_by.as_param());
    }

    serializer.finish()
}

/// Decodes a query string into a [`FilterState`].
///
/// Accepts an optional leading `?`. Unknown parameters are ignored, absent
/// ones take their default, and when a parameter repeats the first value
/// wins. Never fails.
pub fn decode(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);
    decode_pairs(form_urlencoded::parse(query.as_bytes()))
}

/// Decodes already-split key/value pairs into a [`FilterState`].
pub fn decode_pairs<I, K, V>(pairs: I) -> FilterState
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut search = None;
    let mut mode = None;
    let mut specialties = None;
    let mut sort = None;

    for (key, value) in pairs {
        let slot = match key.as_ref() {
            SEARCH_PARAM => &mut search,
            MODE_PARAM => &mut mode,
            SPECIALTIES_PARAM => &mut specialties,
            SORT_PARAM => &mut sort,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.as_ref().to_string());
        }
    }

    FilterState {
        search_term: search.unwrap_or_default(),
        consultation_mode: mode
            .as_deref()
            .map(ConsultationModeFilter::from_param)
            .unwrap_or_default(),
        specialties: specialties
            .as_deref()
            .map(split_specialties)
            .unwrap_or_default(),
        sort_by: sort.as_deref().map(SortBy::from_param).unwrap_or_default(),
    }
}

/// Splits a `specialties` value. Empty segments are dropped, so an empty
/// value is an empty set.
pub fn split_specialties(value: &str) -> SpecialtySet {
    value
        .split(SPECIALTY_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Builds `path?query`, or just `path` when the state is the default.
pub fn location(path: &str, filters: &FilterState) -> String {
    let query = encode(filters);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}
