//! Appointment type catalog.
//!
//! The clinic offers a fixed set of appointment types. Each type has a wire code (the value a
//! selection control submits), a display label, and a one-sentence description shown in the
//! summary.
//!
//! The catalog is a closed enum, so adding a type forces every `match` below to be updated.
//! Lookups by raw code are total: unknown codes fall back to the code itself for the label and
//! to an empty description.

use crate::{FormError, FormResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An appointment type offered by the clinic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentType {
    #[serde(rename = "homevisit")]
    HomeVisit,
    Collect,
    Fitting,
    DepositRepair,
    Impression,
    HospitalFollowup,
    Purchase,
}

impl AppointmentType {
    /// All types, in the order the selection control lists them.
    pub const ALL: [AppointmentType; 7] = [
        AppointmentType::HomeVisit,
        AppointmentType::Collect,
        AppointmentType::Fitting,
        AppointmentType::DepositRepair,
        AppointmentType::Impression,
        AppointmentType::HospitalFollowup,
        AppointmentType::Purchase,
    ];

    /// Wire code submitted by the selection control.
    pub fn code(&self) -> &'static str {
        match self {
            AppointmentType::HomeVisit => "homevisit",
            AppointmentType::Collect => "collect",
            AppointmentType::Fitting => "fitting",
            AppointmentType::DepositRepair => "deposit-repair",
            AppointmentType::Impression => "impression",
            AppointmentType::HospitalFollowup => "hospital-followup",
            AppointmentType::Purchase => "purchase",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentType::HomeVisit => "Home Visit",
            AppointmentType::Collect => "Collect Hearing Aid",
            AppointmentType::Fitting => "Fitting Hearing Aid",
            AppointmentType::DepositRepair => "Deposit Repair Hearing Aid",
            AppointmentType::Impression => "Impression Taking",
            AppointmentType::HospitalFollowup => "Hospital Appointment Followup",
            AppointmentType::Purchase => "Hearing Aid Purchases",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AppointmentType::HomeVisit => {
                "Our specialist will visit your home for a hearing assessment."
            }
            AppointmentType::Collect => "Pick up your new or repaired hearing aid from our clinic.",
            AppointmentType::Fitting => "Get your hearing aid properly fitted and adjusted.",
            AppointmentType::DepositRepair => "Leave your hearing aid for repair and maintenance.",
            AppointmentType::Impression => "Get ear impressions taken for custom hearing aids.",
            AppointmentType::HospitalFollowup => {
                "Follow-up consultation after hospital appointment."
            }
            AppointmentType::Purchase => "Consultation for new hearing aid purchase.",
        }
    }

    /// Looks up a type by its exact wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AppointmentType {
    type Err = FormError;

    fn from_str(s: &str) -> FormResult<Self> {
        Self::from_code(s).ok_or_else(|| FormError::UnknownAppointmentType(s.to_owned()))
    }
}

/// Returns the display label for `code`, or `code` itself when it is not in the catalog.
pub fn lookup_type_label(code: &str) -> &str {
    AppointmentType::from_code(code).map_or(code, |t| t.label())
}

/// Returns the description for `code`, or an empty string when it is not in the catalog.
pub fn lookup_type_description(code: &str) -> &'static str {
    AppointmentType::from_code(code).map_or("", |t| t.description())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_seven_distinct_codes() {
        let codes: HashSet<_> = AppointmentType::ALL.iter().map(|t| t.code()).collect();
        assert_eq!(codes.len(), 7);
    }

    #[test]
    fn every_code_resolves_to_its_own_entry() {
        for t in AppointmentType::ALL {
            assert_eq!(AppointmentType::from_code(t.code()), Some(t));
            assert_eq!(lookup_type_label(t.code()), t.label());
            assert_eq!(lookup_type_description(t.code()), t.description());
        }
    }

    #[test]
    fn fitting_label_and_description() {
        assert_eq!(lookup_type_label("fitting"), "Fitting Hearing Aid");
        assert_eq!(
            lookup_type_description("fitting"),
            "Get your hearing aid properly fitted and adjusted."
        );
    }

    #[test]
    fn unknown_code_echoes_label_and_has_no_description() {
        assert_eq!(lookup_type_label("audiogram"), "audiogram");
        assert_eq!(lookup_type_description("audiogram"), "");
        assert_eq!(lookup_type_label(""), "");
        assert_eq!(lookup_type_description(""), "");
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!(lookup_type_label("Fitting"), "Fitting");
        assert_eq!(lookup_type_description("HOMEVISIT"), "");
    }

    #[test]
    fn from_str_rejects_unknown_code() {
        let err = "walk-in"
            .parse::<AppointmentType>()
            .expect_err("should reject unknown code");
        assert!(matches!(err, FormError::UnknownAppointmentType(code) if code == "walk-in"));
    }

    #[test]
    fn serde_uses_wire_codes() {
        for t in AppointmentType::ALL {
            let json = serde_json::to_string(&t).expect("serialise type");
            assert_eq!(json, format!("\"{}\"", t.code()));
        }
    }
}
