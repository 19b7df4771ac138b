//! Loading form values from a JSON file and command-line flags.

use anyhow::Context;
use clap::Args;
use ghcc_core::{Field, FormFields};
use std::path::{Path, PathBuf};

/// Form values supplied on the command line.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Appointment type code (see `ghcc types`)
    #[arg(long = "type", value_name = "CODE")]
    pub appointment_type: Option<String>,
    /// Patient name
    #[arg(long)]
    pub name: Option<String>,
    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,
    /// Appointment date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
    /// Appointment time (for example 10:30)
    #[arg(long)]
    pub time: Option<String>,
    /// JSON file with any of: type, name, phone, date, time
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl FieldArgs {
    /// Builds the form from `--file` (if given) with individual flags taking precedence.
    pub fn load(&self) -> anyhow::Result<FormFields> {
        let mut fields = match &self.file {
            Some(path) => read_form_file(path)?,
            None => FormFields::default(),
        };

        let overrides = [
            (Field::Type, &self.appointment_type),
            (Field::Name, &self.name),
            (Field::Phone, &self.phone),
            (Field::Date, &self.date),
            (Field::Time, &self.time),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                fields.set(field, value.as_str());
            }
        }

        Ok(fields)
    }
}

fn read_form_file(path: &Path) -> anyhow::Result<FormFields> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read form file: {}", path.display()))?;
    let fields = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse form file: {}", path.display()))?;
    tracing::debug!("loaded form values from {}", path.display());
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn flags_alone_build_the_form() {
        let args = FieldArgs {
            appointment_type: Some("collect".into()),
            name: Some("Sam".into()),
            ..FieldArgs::default()
        };
        let fields = args.load().expect("load fields");
        assert_eq!(fields.appointment_type, "collect");
        assert_eq!(fields.name, "Sam");
        assert_eq!(fields.phone, "");
    }

    #[test]
    fn flags_override_file_values() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"type":"fitting","name":"Jane Doe","phone":"0123456789"}}"#
        )
        .expect("write form");

        let args = FieldArgs {
            name: Some("John Doe".into()),
            file: Some(file.path().to_path_buf()),
            ..FieldArgs::default()
        };
        let fields = args.load().expect("load fields");
        assert_eq!(fields.appointment_type, "fitting");
        assert_eq!(fields.name, "John Doe");
        assert_eq!(fields.phone, "0123456789");
    }

    #[test]
    fn malformed_file_reports_path() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write form");

        let args = FieldArgs {
            file: Some(file.path().to_path_buf()),
            ..FieldArgs::default()
        };
        let err = args.load().expect_err("should reject malformed json");
        assert!(err.to_string().contains("failed to parse form file"));
    }

    #[test]
    fn missing_file_reports_path() {
        let args = FieldArgs {
            file: Some(PathBuf::from("/definitely/not/here.json")),
            ..FieldArgs::default()
        };
        let err = args.load().expect_err("should reject missing file");
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
