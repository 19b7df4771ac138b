//! Plain-text appointment summary.
//!
//! The summary is rebuilt from scratch each time it is requested. Callers are expected to have
//! validated the form first; nothing here re-checks the values.

use crate::catalog::{lookup_type_description, lookup_type_label, AppointmentType};
use crate::config::CoreConfig;
use crate::constants::{SUMMARY_HEADER, SUMMARY_RULE};
use crate::validation::parse_input_date;
use ghcc_types::FormFields;
use std::fmt::Write;

/// Builds the summary shown to the patient after a successful submission.
///
/// The header and the appointment type and description lines are always present. Name,
/// phone, date and time lines appear only when the corresponding value is non-empty, and an
/// omitted line leaves no gap. The whole block is trimmed before it is returned.
///
/// Dates are rendered with the configured display format. A date that does not parse, or
/// that the format cannot render, is shown exactly as entered.
pub fn build_summary(fields: &FormFields, cfg: &CoreConfig) -> String {
    let code = fields.appointment_type.as_str();
    if !code.is_empty() && AppointmentType::from_code(code).is_none() {
        tracing::warn!("summary requested for unknown appointment type '{}'", code);
    }

    let mut lines = vec![
        SUMMARY_HEADER.to_owned(),
        SUMMARY_RULE.to_owned(),
        format!("Appointment Type: {}", lookup_type_label(code)),
        format!("Description: {}", lookup_type_description(code)),
    ];

    if !fields.name.is_empty() {
        lines.push(format!("Name: {}", fields.name));
    }
    if !fields.phone.is_empty() {
        lines.push(format!("Phone: {}", fields.phone));
    }
    if !fields.date.is_empty() {
        lines.push(format!(
            "Date: {}",
            format_display_date(&fields.date, cfg.date_display_format())
        ));
    }
    if !fields.time.is_empty() {
        lines.push(format!("Time: {}", fields.time));
    }

    lines.join("\n").trim().to_owned()
}

/// Renders a `YYYY-MM-DD` value with `format`, falling back to the raw value.
pub fn format_display_date(raw: &str, format: &str) -> String {
    let Some(date) = parse_input_date(raw) else {
        return raw.to_owned();
    };

    // Time specifiers on a bare date make chrono's formatter fail rather than panic here.
    let mut rendered = String::new();
    if write!(rendered, "{}", date.format(format)).is_err() {
        tracing::warn!("date display format '{}' cannot render a date", format);
        return raw.to_owned();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DateComparison;

    fn jane() -> FormFields {
        FormFields {
            appointment_type: "fitting".into(),
            name: "Jane Doe".into(),
            phone: "+1 555-123-4567".into(),
            date: "2099-01-01".into(),
            time: "10:30".into(),
        }
    }

    #[test]
    fn full_summary_matches_expected_layout() {
        let summary = build_summary(&jane(), &CoreConfig::default());
        assert_eq!(
            summary,
            "Patient Details:\n\
             ---------------\n\
             Appointment Type: Fitting Hearing Aid\n\
             Description: Get your hearing aid properly fitted and adjusted.\n\
             Name: Jane Doe\n\
             Phone: +1 555-123-4567\n\
             Date: 1/1/2099\n\
             Time: 10:30"
        );
    }

    #[test]
    fn empty_optional_fields_are_omitted_without_gaps() {
        let fields = FormFields {
            appointment_type: "purchase".into(),
            phone: "0123456789".into(),
            ..FormFields::default()
        };
        let summary = build_summary(&fields, &CoreConfig::default());
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Patient Details:",
                "---------------",
                "Appointment Type: Hearing Aid Purchases",
                "Description: Consultation for new hearing aid purchase.",
                "Phone: 0123456789",
            ]
        );
    }

    #[test]
    fn header_and_type_lines_survive_an_empty_form() {
        let summary = build_summary(&FormFields::new(), &CoreConfig::default());
        assert_eq!(
            summary,
            "Patient Details:\n---------------\nAppointment Type: \nDescription:"
        );
    }

    #[test]
    fn unknown_type_echoes_code_with_blank_description() {
        let fields = FormFields {
            appointment_type: "walk-in".into(),
            name: "Sam".into(),
            ..FormFields::default()
        };
        let summary = build_summary(&fields, &CoreConfig::default());
        assert!(summary.contains("Appointment Type: walk-in\n"));
        assert!(summary.contains("Description: \n"));
    }

    #[test]
    fn name_is_printed_as_entered() {
        let mut fields = jane();
        fields.name = "  Jane  Doe".into();
        let summary = build_summary(&fields, &CoreConfig::default());
        assert!(summary.contains("\nName:   Jane  Doe\n"));
    }

    #[test]
    fn trailing_whitespace_of_last_line_is_trimmed() {
        let mut fields = jane();
        fields.time = "10:30   ".into();
        let summary = build_summary(&fields, &CoreConfig::default());
        assert!(summary.ends_with("Time: 10:30"));
    }

    #[test]
    fn date_uses_configured_display_format() {
        let cfg = CoreConfig::new(DateComparison::CalendarDay, "%d %B %Y".into()).expect("config");
        let summary = build_summary(&jane(), &cfg);
        assert!(summary.contains("\nDate: 01 January 2099\n"));
    }

    #[test]
    fn unparseable_date_is_echoed() {
        assert_eq!(format_display_date("next week", "%-m/%-d/%Y"), "next week");
    }

    #[test]
    fn time_only_format_falls_back_to_raw_date() {
        assert_eq!(format_display_date("2099-01-01", "%H:%M"), "2099-01-01");
    }
}
