//! Constants used throughout the GHCC core crate.
//!
//! User-facing validation messages live here so that hosts and tests compare against the
//! same text the patient sees.

/// Shown when no appointment type has been selected.
pub const TYPE_REQUIRED: &str = "Appointment type is required";

/// Shown when the name is empty or whitespace only.
pub const NAME_REQUIRED: &str = "Name is required";

/// Shown when the phone number is empty or whitespace only.
pub const PHONE_REQUIRED: &str = "Phone number is required";

/// Shown when a non-empty phone number does not match [`PHONE_PATTERN`].
pub const PHONE_INVALID: &str = "Please enter a valid phone number";

/// Shown when no date has been entered.
pub const DATE_REQUIRED: &str = "Date is required";

/// Shown when a non-empty date is not a `YYYY-MM-DD` calendar date.
pub const DATE_INVALID: &str = "Please enter a valid date";

/// Shown when the chosen date is before the current date.
pub const DATE_IN_PAST: &str = "Date cannot be in the past";

/// Shown when no time has been entered.
pub const TIME_REQUIRED: &str = "Time is required";

/// Optional leading `+`, then at least ten digits, whitespace characters or hyphens.
///
/// The whitespace set is spelled out to match the browser's `\s` class: it includes U+FEFF and
/// excludes U+0085, unlike the regex crate's Unicode `\s`.
pub const PHONE_PATTERN: &str = r"^\+?[0-9\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}-]{10,}$";

/// Wire format of the date control.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Default summary date format (US short date, for example `1/1/2099`).
pub const DEFAULT_DATE_DISPLAY_FORMAT: &str = "%-m/%-d/%Y";

/// First line of every summary.
pub const SUMMARY_HEADER: &str = "Patient Details:";

/// Rule under the summary header.
pub const SUMMARY_RULE: &str = "---------------";
