//! # docfinder-directory - Doctor Directory Core
//!
//! This crate holds everything about the doctor directory that is not HTTP
//! plumbing: the canonical [`Doctor`] record, the [`FilterState`] value, the
//! filter engine, the query-string codec, the autocomplete matcher, the
//! remote feed and its normalizer, and the view models rendered by the API.
//!
//! ## Filter pipeline
//!
//! ```text
//! remote feed -> normalize -> Directory
//!                                 |
//!    query string --decode--> FilterState --apply--> Vec<Doctor> --render--> listing
//!                                 |
//!                                 +--encode--> query string
//! ```
//!
//! The engine, codec and matcher are pure functions over in-memory values.
//! Only [`Directory::load`] touches the network, and it never fails: a broken
//! feed yields an empty directory carrying a [`Notice`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use docfinder_directory::{Directory, DirectorySession, Doctor, FilterIntent, SortBy};
//!
//! let directory = Arc::new(Directory::from_doctors(vec![
//!     Doctor { id: "1".into(), name: "Dr. Anna".into(), fees: 500, ..Default::default() },
//!     Doctor { id: "2".into(), name: "Dr. Bob".into(), fees: 100, ..Default::default() },
//! ]));
//!
//! let mut session = DirectorySession::from_query(directory, "search=dr");
//! session.dispatch(&FilterIntent::SetSort(SortBy::Fees));
//!
//! assert_eq!(session.query_string(), "search=dr&sort=fees");
//! assert_eq!(session.results()[0].name, "Dr. Bob");
//! ```
//!
//! ## Modules
//!
//! - [`model`] - The canonical doctor record
//! - [`state`] - Filter state and user intents
//! - [`engine`] - The filter engine
//! - [`query`] - Query-string encoding and decoding
//! - [`autocomplete`] - Suggestions and the search box state machine
//! - [`normalize`] - Feed record normalization
//! - [`source`] - Doctor feed sources
//! - [`directory`] - The loaded working set
//! - [`session`] - Per-user lifecycle over a directory
//! - [`view`] - Display-ready projections
//! - [`error`] - Error types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod autocomplete;
pub mod directory;
pub mod engine;
pub mod error;
pub mod model;
pub mod normalize;
pub mod query;
pub mod session;
pub mod source;
pub mod state;
pub mod view;

pub use autocomplete::{Autocomplete, AutocompleteState, SUGGESTION_LIMIT, suggest};
pub use directory::{Directory, Notice, NoticeSeverity};
pub use engine::apply;
pub use error::{DirectoryError, DirectoryResult};
pub use model::{ConsultationMode, Doctor};
pub use normalize::{ApiDoctor, all_specialties, extract_number, normalize};
pub use query::{decode, encode};
pub use session::DirectorySession;
pub use source::{DEFAULT_SOURCE_URL, DoctorSource, HttpDoctorSource, StaticDoctorSource};
pub use state::{ConsultationModeFilter, FilterIntent, FilterState, SortBy, SpecialtySet};
pub use view::{DoctorCard, DoctorListing, FilterPanel, Suggestion, SuggestionList};
