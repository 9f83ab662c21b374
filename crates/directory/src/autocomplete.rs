//! Autocomplete matcher and the suggestion box state machine.
//!
//! Suggestions are a bounded substring filter over doctor names, kept in
//! feed order. There is no ranking and no fuzzy matching.

use serde::Serialize;

use crate::model::Doctor;

/// Maximum number of suggestions shown at once.
pub const SUGGESTION_LIMIT: usize = 3;

/// Returns up to [`SUGGESTION_LIMIT`] doctors whose name contains `partial`,
/// case-insensitively, in their original order.
///
/// A blank `partial` yields no suggestions.
pub fn suggest(doctors: &[Doctor], partial: &str) -> Vec<Doctor> {
    if partial.trim().is_empty() {
        return Vec::new();
    }
    let needle = partial.to_lowercase();
    doctors
        .iter()
        .filter(|doctor| doctor.name_contains_lower(&needle))
        .take(SUGGESTION_LIMIT)
        .cloned()
        .collect()
}

/// Whether the suggestion list is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AutocompleteState {
    /// Nothing shown.
    #[default]
    Closed,
    /// One to three suggestions shown.
    Open,
}

/// The search box: typed text plus the suggestion list.
///
/// ```text
/// CLOSED --input with >= 1 match--> OPEN
/// OPEN   --input empty / 0 matches--> CLOSED
/// OPEN   --select / submit----------> CLOSED (commits)
/// OPEN   --dismiss (focus lost)-----> CLOSED (no commit)
/// ```
#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    input: String,
    suggestions: Vec<Doctor>,
    state: AutocompleteState,
}

impl Autocomplete {
    /// Creates a closed, empty search box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text in the box.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current suggestions. Empty while closed.
    pub fn suggestions(&self) -> &[Doctor] {
        match self.state {
            AutocompleteState::Open => &self.suggestions,
            AutocompleteState::Closed => &[],
        }
    }

    /// Current state.
    pub fn state(&self) -> AutocompleteState {
        self.state
    }

    /// Returns true while suggestions are shown.
    pub fn is_open(&self) -> bool {
        self.state == AutocompleteState::Open
    }

    /// The user typed: recompute suggestions and open or close.
    pub fn type_text(&mut self, doctors: &[Doctor], text: impl Into<String>) {
        self.input = text.into();
        self.suggestions = suggest(doctors, &self.input);
        self.state = if self.suggestions.is_empty() {
            AutocompleteState::Closed
        } else {
            AutocompleteState::Open
        };
    }

    /// The user submitted the box. Closes and returns the text to commit.
    pub fn submit(&mut self) -> String {
        self.close();
        self.input.clone()
    }

    /// The user picked suggestion `index`. The box takes the doctor's name,
    /// closes, and returns the name to commit. Out-of-range or closed picks
    /// return `None` and change nothing.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let name = self.suggestions().get(index)?.name.clone();
        self.input = name.clone();
        self.close();
        Some(name)
    }

    /// Focus moved elsewhere. Closes without committing.
    pub fn dismiss(&mut self) {
        self.close();
    }

    /// The committed search term changed from outside; show it in the box.
    /// Replacing the text closes the box.
    pub fn sync(&mut self, search_term: &str) {
        if self.input != search_term {
            self.input = search_term.to_string();
            self.close();
        }
    }

    fn close(&mut self) {
        self.state = AutocompleteState::Closed;
        self.suggestions.clear();
    }
}
