//! # GHCC Core
//!
//! Business logic for the GHCC patient appointment form.
//!
//! This crate owns every decision the form makes:
//! - The appointment type catalog and its total label/description lookups
//! - Per-field validation rules and their user-facing messages
//! - Plain-text summary assembly
//! - A [`FormSession`] that folds field edits and generation requests into one form's state
//!
//! **No presentation concerns**: markup, input controls, and terminal I/O belong to the host
//! (see the `ghcc-cli` crate). Configuration is resolved by the host and passed in as a
//! [`CoreConfig`].

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod session;
pub mod summary;
pub mod validation;

pub use catalog::{lookup_type_description, lookup_type_label, AppointmentType};
pub use config::{CoreConfig, DateComparison};
pub use error::{FormError, FormResult};
pub use session::FormSession;
pub use summary::build_summary;
pub use validation::{validate, validate_at};

// Re-export the data model so hosts only need one dependency.
pub use ghcc_types::{Field, FieldErrors, FieldNameError, FormFields};
