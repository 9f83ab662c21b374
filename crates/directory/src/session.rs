//! Directory session.
//!
//! Drives one user's view of the directory through its lifecycle: defaults,
//! a single hydration from the query string, then discrete intents. Every
//! intent replaces the filter state with a new value; the query string and
//! the result list are always derived from the current value.

use std::sync::Arc;

use tracing::debug;

use crate::autocomplete::Autocomplete;
use crate::directory::Directory;
use crate::model::Doctor;
use crate::query;
use crate::state::{FilterIntent, FilterState};

/// One user's filter state over a shared [`Directory`].
#[derive(Debug, Clone)]
pub struct DirectorySession {
    directory: Arc<Directory>,
    filters: FilterState,
    autocomplete: Autocomplete,
    hydrated: bool,
}

impl DirectorySession {
    /// Starts a session with default filters.
    pub fn new(directory: Arc<Directory>) -> Self {
        Self {
            directory,
            filters: FilterState::default(),
            autocomplete: Autocomplete::new(),
            hydrated: false,
        }
    }

    /// Starts a session and hydrates it from `query` in one step.
    pub fn from_query(directory: Arc<Directory>, query: &str) -> Self {
        let mut session = Self::new(directory);
        session.hydrate(query);
        session
    }

    /// Overwrites the filters from `query`. Only the first call has an
    /// effect; returns whether this call hydrated the session.
    pub fn hydrate(&mut self, query: &str) -> bool {
        if self.hydrated {
            return false;
        }
        self.hydrated = true;
        self.filters = query::decode(query);
        self.autocomplete.sync(&self.filters.search_term);
        debug!(filters = ?self.filters, "Session hydrated");
        true
    }

    /// Applies `intent`, replacing the current filters.
    pub fn dispatch(&mut self, intent: &FilterIntent) -> &FilterState {
        let next = self.filters.with_intent(intent);
        if next.search_term != self.filters.search_term {
            self.autocomplete.sync(&next.search_term);
        }
        self.filters = next;
        debug!(intent = ?intent, query = %self.query_string(), "Filters updated");
        &self.filters
    }

    /// The user typed into the search box.
    pub fn type_search(&mut self, text: &str) {
        self.autocomplete.type_text(self.directory.doctors(), text);
    }

    /// The user picked a suggestion; commits its name as the search term.
    pub fn select_suggestion(&mut self, index: usize) -> Option<&FilterState> {
        let name = self.autocomplete.select(index)?;
        Some(self.dispatch(&FilterIntent::Search(name)))
    }

    /// The user submitted the search box; commits the typed text.
    pub fn submit_search(&mut self) -> &FilterState {
        let term = self.autocomplete.submit();
        self.dispatch(&FilterIntent::Search(term))
    }

    /// Focus left the search box.
    pub fn dismiss_suggestions(&mut self) {
        self.autocomplete.dismiss();
    }

    /// Current filters.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Current search box.
    pub fn autocomplete(&self) -> &Autocomplete {
        &self.autocomplete
    }

    /// The directory this session reads.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Whether [`Self::hydrate`] has run.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// The query string for the current filters.
    pub fn query_string(&self) -> String {
        query::encode(&self.filters)
    }

    /// The filtered, sorted doctors for the current filters.
    pub fn results(&self) -> Vec<Doctor> {
        self.directory.search(&self.filters)
    }
}
