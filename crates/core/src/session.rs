//! Form session: the state one presentation layer keeps for a single appointment form.
//!
//! A session folds change notifications into its [`FormFields`], clears a field's error as soon
//! as the patient edits that field, and runs validation plus summary generation on request.
//! The rules themselves live in [`crate::validation`] and [`crate::summary`]; this module only
//! owns the mutable state around them.

use crate::config::CoreConfig;
use crate::summary::build_summary;
use crate::validation::validate_at;
use crate::{FormError, FormResult};
use chrono::{DateTime, Local, TimeZone};
use ghcc_types::{Field, FieldErrors, FormFields};

/// One appointment form's fields, current errors, and last generated summary.
#[derive(Debug, Clone)]
pub struct FormSession {
    cfg: CoreConfig,
    fields: FormFields,
    errors: FieldErrors,
    summary: Option<String>,
}

impl FormSession {
    /// Creates an empty session.
    pub fn new(cfg: CoreConfig) -> Self {
        Self::with_fields(cfg, FormFields::default())
    }

    /// Creates a session pre-filled with `fields`. No validation is run.
    pub fn with_fields(cfg: CoreConfig, fields: FormFields) -> Self {
        Self {
            cfg,
            fields,
            errors: FieldErrors::new(),
            summary: None,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The summary from the last successful generation, if any.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Stores `value` for `field` and clears that field's error if it has one.
    ///
    /// Other fields' errors are left untouched until the next generation.
    pub fn apply_change(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
        if self.errors.clear(field).is_some() {
            tracing::debug!("cleared error for field '{}' after edit", field);
        }
    }

    /// Same as [`Self::apply_change`], resolving the field from its wire name.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] if `name` is not a form field. The session is not
    /// modified in that case.
    pub fn apply_change_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> FormResult<()> {
        let field: Field = name.parse()?;
        self.apply_change(field, value);
        Ok(())
    }

    /// Validates the form against the local clock and, if it passes, builds the summary.
    pub fn generate(&mut self) -> FormResult<&str> {
        self.generate_at(&Local::now())
    }

    /// Validates the form as of `now` and, if it passes, builds the summary.
    ///
    /// The validation result always replaces the session's errors. A failed generation keeps
    /// the previous summary.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Validation`] with the failing fields when validation does not pass.
    pub fn generate_at<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> FormResult<&str> {
        self.errors = validate_at(&self.fields, &self.cfg, now);

        if !self.errors.is_empty() {
            tracing::debug!(
                "summary not generated: {} field(s) failed validation",
                self.errors.len()
            );
            return Err(FormError::Validation(self.errors.clone()));
        }

        let summary = self.summary.insert(build_summary(&self.fields, &self.cfg));
        tracing::info!(
            "generated appointment summary for type '{}'",
            self.fields.appointment_type
        );
        Ok(summary.as_str())
    }

    /// Returns the session to an empty form with no errors and no summary.
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.errors = FieldErrors::new();
        self.summary = None;
    }
}
