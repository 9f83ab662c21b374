//! HTTP request handlers.
//!
//! - [`doctors`] - Doctor listing, single doctor and filter intents
//! - [`suggestions`] - Search box autocomplete
//! - [`filters`] - Specialty universe and filter panel
//! - [`health`] - Health check endpoints

pub mod doctors;
pub mod filters;
pub mod health;
pub mod suggestions;

pub use doctors::{intent_handler, list_handler, read_handler};
pub use filters::{filters_handler, specialties_handler};
pub use health::health_handler;
pub use suggestions::suggestions_handler;
