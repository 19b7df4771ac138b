//! # GHCC Types
//!
//! Plain data model shared by the appointment form core and its hosts.
//!
//! - [`Field`]: the five named form fields, in form order
//! - [`FormFields`]: the values a patient has entered so far
//! - [`FieldErrors`]: per-field validation messages derived from [`FormFields`]
//!
//! No rules live here. Validation and summary assembly belong to `ghcc-core`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing a field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldNameError {
    /// The name does not match any form field.
    #[error("unknown field: '{0}' (expected one of type, name, phone, date, time)")]
    Unknown(String),
}

/// A named input on the appointment form.
///
/// Variants are declared in the order the form presents them, so ordered collections keyed by
/// `Field` list errors top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Type,
    Name,
    Phone,
    Date,
    Time,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 5] = [
        Field::Type,
        Field::Name,
        Field::Phone,
        Field::Date,
        Field::Time,
    ];

    /// Returns the wire name used by form controls and JSON payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Date => "date",
            Field::Time => "time",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FieldNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FieldNameError::Unknown(s.to_owned()))
    }
}

/// Raw values entered on the appointment form.
///
/// Every field starts as an empty string and holds exactly what the user typed; nothing is
/// trimmed or normalised on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFields {
    /// Appointment type code, for example `homevisit`.
    #[serde(rename = "type")]
    pub appointment_type: String,
    /// Patient name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    /// Clock time, no timezone.
    pub time: String,
}

impl FormFields {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Type => &self.appointment_type,
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Date => &self.date,
            Field::Time => &self.time,
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Type => &mut self.appointment_type,
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
        };
        *slot = value.into();
    }
}

/// Validation messages keyed by the field that failed.
///
/// Only failing fields are present. An empty mapping means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` against `field`, replacing any earlier message.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Removes the message for `field`, returning it if one was present.
    pub fn clear(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates messages in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_parses_wire_names() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn field_rejects_unknown_and_differently_cased_names() {
        let err = "email".parse::<Field>().expect_err("should reject unknown field");
        assert_eq!(err, FieldNameError::Unknown("email".into()));
        assert!("Name".parse::<Field>().is_err());
    }

    #[test]
    fn form_fields_start_empty() {
        let fields = FormFields::new();
        for field in Field::ALL {
            assert_eq!(fields.get(field), "");
        }
    }

    #[test]
    fn set_then_get_targets_only_that_field() {
        let mut fields = FormFields::new();
        fields.set(Field::Phone, "+44 1234 567890");
        assert_eq!(fields.get(Field::Phone), "+44 1234 567890");
        assert_eq!(fields.get(Field::Name), "");
        assert_eq!(fields.get(Field::Type), "");
    }

    #[test]
    fn form_fields_deserialise_with_type_key_and_missing_fields() {
        let json = r#"{"type":"fitting","name":"Jane Doe"}"#;
        let fields: FormFields = serde_json::from_str(json).expect("parse json");
        assert_eq!(fields.appointment_type, "fitting");
        assert_eq!(fields.name, "Jane Doe");
        assert_eq!(fields.phone, "");
        assert_eq!(fields.time, "");
    }

    #[test]
    fn field_errors_serialise_in_form_order() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Time, "Time is required");
        errors.insert(Field::Type, "Appointment type is required");

        let json = serde_json::to_string(&errors).expect("serialise errors");
        assert_eq!(
            json,
            r#"{"type":"Appointment type is required","time":"Time is required"}"#
        );
    }

    #[test]
    fn clearing_an_error_removes_the_entry() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Name, "Name is required");
        assert!(errors.contains(Field::Name));

        assert_eq!(errors.clear(Field::Name).as_deref(), Some("Name is required"));
        assert!(errors.is_empty());
        assert_eq!(errors.clear(Field::Name), None);
    }

    #[test]
    fn field_errors_display_joins_messages() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Date, "Date is required");
        errors.insert(Field::Name, "Name is required");
        assert_eq!(
            errors.to_string(),
            "name: Name is required; date: Date is required"
        );
    }
}
