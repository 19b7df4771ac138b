//! Appointment form validation.
//!
//! Every field is checked independently and every failure is collected; a problem with one
//! field never hides a problem with another. The result is a [`FieldErrors`] mapping that is
//! empty exactly when the form may be submitted.
//!
//! Validation is a pure function of the form values, the configuration, and the current
//! moment. [`validate`] reads the local clock; [`validate_at`] takes the moment explicitly.

use crate::config::{CoreConfig, DateComparison};
use crate::constants::{
    DATE_INPUT_FORMAT, DATE_INVALID, DATE_IN_PAST, DATE_REQUIRED, NAME_REQUIRED, PHONE_INVALID,
    PHONE_PATTERN, PHONE_REQUIRED, TIME_REQUIRED, TYPE_REQUIRED,
};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use ghcc_types::{Field, FieldErrors, FormFields};
use regex::Regex;
use std::sync::LazyLock;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: PHONE_PATTERN is a fixed, known-good pattern
    Regex::new(PHONE_PATTERN).expect("PHONE_PATTERN is a valid regex")
});

/// Validates `fields` against the local clock.
pub fn validate(fields: &FormFields, cfg: &CoreConfig) -> FieldErrors {
    validate_at(fields, cfg, &Local::now())
}

/// Validates `fields` as of `now`.
///
/// # Arguments
///
/// * `fields` - Raw form values.
/// * `cfg` - Core configuration; only the date comparison policy is consulted.
/// * `now` - The moment of validation. The calendar-day policy uses the date of `now` in its
///   own time zone.
///
/// # Returns
///
/// A mapping from each failing field to its message. Passing fields are absent.
pub fn validate_at<Tz: TimeZone>(
    fields: &FormFields,
    cfg: &CoreConfig,
    now: &DateTime<Tz>,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in Field::ALL {
        let value = fields.get(field);
        let outcome = match field {
            Field::Type => check_required(value, TYPE_REQUIRED),
            Field::Name => check_required_trimmed(value, NAME_REQUIRED),
            Field::Phone => check_phone(value),
            Field::Date => check_date(value, cfg.date_comparison(), now),
            Field::Time => check_required(value, TIME_REQUIRED),
        };

        if let Some(message) = outcome {
            tracing::debug!("field '{}' failed validation: {}", field, message);
            errors.insert(field, message);
        }
    }

    tracing::debug!("form validation finished with {} error(s)", errors.len());
    errors
}

/// Returns true for the characters the browser strips with `String.prototype.trim`.
///
/// This differs from `char::is_whitespace`: U+FEFF counts, U+0085 does not.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn is_blank(value: &str) -> bool {
    value.trim_matches(is_form_whitespace).is_empty()
}

/// Returns true if `phone` matches the accepted phone shape.
///
/// The raw value is matched, so surrounding whitespace counts towards the length and a `+`
/// is only accepted as the very first character.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Returns true if `date` is before `now` under `policy`.
pub fn is_in_past<Tz: TimeZone>(
    date: NaiveDate,
    policy: DateComparison,
    now: &DateTime<Tz>,
) -> bool {
    match policy {
        DateComparison::CalendarDay => date < now.date_naive(),
        DateComparison::Instant => {
            date.and_time(NaiveTime::MIN).and_utc() < now.with_timezone(&Utc)
        }
    }
}

/// Parses a date control value (`YYYY-MM-DD`).
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT).ok()
}

fn check_required(value: &str, message: &'static str) -> Option<&'static str> {
    value.is_empty().then_some(message)
}

fn check_required_trimmed(value: &str, message: &'static str) -> Option<&'static str> {
    is_blank(value).then_some(message)
}

fn check_phone(value: &str) -> Option<&'static str> {
    if is_blank(value) {
        return Some(PHONE_REQUIRED);
    }
    (!is_valid_phone(value)).then_some(PHONE_INVALID)
}

fn check_date<Tz: TimeZone>(
    value: &str,
    policy: DateComparison,
    now: &DateTime<Tz>,
) -> Option<&'static str> {
    if value.is_empty() {
        return Some(DATE_REQUIRED);
    }

    let Some(date) = parse_input_date(value) else {
        return Some(DATE_INVALID);
    };

    is_in_past(date, policy, now).then_some(DATE_IN_PAST)
}
