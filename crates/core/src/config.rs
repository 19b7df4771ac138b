//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the form logic.
//! The core never reads environment variables itself; hosts collect the raw values and use the
//! `*_from_env_value` helpers to turn them into a [`CoreConfig`].

use crate::constants::DEFAULT_DATE_DISPLAY_FORMAT;
use crate::{FormError, FormResult};
use chrono::format::{Item, StrftimeItems};
use std::fmt;
use std::str::FromStr;

/// How an entered date is compared against the current moment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateComparison {
    /// Compare calendar days. Today is never in the past.
    #[default]
    CalendarDay,
    /// Treat the date as UTC midnight and compare it with the current instant, so today
    /// counts as past once the UTC day has begun.
    Instant,
}

impl DateComparison {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateComparison::CalendarDay => "calendar-day",
            DateComparison::Instant => "instant",
        }
    }
}

impl fmt::Display for DateComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateComparison {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calendar-day" => Ok(DateComparison::CalendarDay),
            "instant" => Ok(DateComparison::Instant),
            other => Err(FormError::InvalidConfig(format!(
                "date comparison must be 'calendar-day' or 'instant', got: '{}'",
                other
            ))),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    date_comparison: DateComparison,
    date_display_format: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            date_comparison: DateComparison::default(),
            date_display_format: DEFAULT_DATE_DISPLAY_FORMAT.to_owned(),
        }
    }
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidConfig`] if `date_display_format` is empty or is not a
    /// valid strftime format string.
    pub fn new(
        date_comparison: DateComparison,
        date_display_format: String,
    ) -> FormResult<Self> {
        validate_date_display_format(&date_display_format)?;

        Ok(Self {
            date_comparison,
            date_display_format,
        })
    }

    pub fn date_comparison(&self) -> DateComparison {
        self.date_comparison
    }

    pub fn date_display_format(&self) -> &str {
        &self.date_display_format
    }
}

/// Rejects empty formats and formats chrono cannot render.
fn validate_date_display_format(format: &str) -> FormResult<()> {
    if format.trim().is_empty() {
        return Err(FormError::InvalidConfig(
            "date display format cannot be empty".into(),
        ));
    }

    if StrftimeItems::new(format).any(|item| item == Item::Error) {
        return Err(FormError::InvalidConfig(format!(
            "date display format is not a valid strftime string: '{}'",
            format
        )));
    }

    Ok(())
}

/// Parse the date comparison policy from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DateComparison::CalendarDay`].
pub fn date_comparison_from_env_value(value: Option<String>) -> FormResult<DateComparison> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<DateComparison>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}

/// Parse the summary date display format from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default US short date format.
pub fn date_display_format_from_env_value(value: Option<String>) -> FormResult<String> {
    let value = value.filter(|v| !v.trim().is_empty());

    match value {
        Some(format) => {
            validate_date_display_format(&format)?;
            Ok(format)
        }
        None => Ok(DEFAULT_DATE_DISPLAY_FORMAT.to_owned()),
    }
}
