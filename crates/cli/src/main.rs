use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use ghcc_core::config::{date_comparison_from_env_value, date_display_format_from_env_value};
use ghcc_core::{
    validate, validate_at, AppointmentType, CoreConfig, FieldErrors, FormError, FormFields,
    FormSession,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod input;
mod interactive;

use input::FieldArgs;

#[derive(Parser)]
#[command(name = "ghcc")]
#[command(about = "GHCC patient appointment form")]
struct Cli {
    /// How to decide whether a date is in the past: calendar-day or instant
    /// [env: GHCC_DATE_COMPARISON]
    #[arg(long, global = true)]
    date_comparison: Option<String>,
    /// strftime format for the summary date line [env: GHCC_DATE_FORMAT]
    #[arg(long, global = true)]
    date_format: Option<String>,
    /// Validate as of this RFC 3339 timestamp instead of the local clock
    #[arg(long, global = true, value_parser = parse_now)]
    now: Option<DateTime<FixedOffset>>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List appointment types
    Types,
    /// Validate form values and print any errors
    Validate {
        #[command(flatten)]
        fields: FieldArgs,
        /// Print errors as a JSON object
        #[arg(long)]
        json: bool,
    },
    /// Validate form values and print the appointment summary
    Summary {
        #[command(flatten)]
        fields: FieldArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fill in the form line by line on stdin
    Interactive,
}

fn parse_now(value: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(value).map_err(|e| format!("invalid RFC 3339 timestamp: {e}"))
}

/// Resolves the core configuration once, flags first, then environment, then defaults.
fn resolve_config(cli: &Cli) -> anyhow::Result<CoreConfig> {
    let date_comparison = date_comparison_from_env_value(
        cli.date_comparison
            .clone()
            .or_else(|| std::env::var("GHCC_DATE_COMPARISON").ok()),
    )?;
    let date_format = date_display_format_from_env_value(
        cli.date_format
            .clone()
            .or_else(|| std::env::var("GHCC_DATE_FORMAT").ok()),
    )?;

    Ok(CoreConfig::new(date_comparison, date_format)?)
}

fn validate_now(
    fields: &FormFields,
    cfg: &CoreConfig,
    now: Option<&DateTime<FixedOffset>>,
) -> FieldErrors {
    match now {
        Some(now) => validate_at(fields, cfg, now),
        None => validate(fields, cfg),
    }
}

/// Outcome of a command, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    Invalid,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Invalid => ExitCode::FAILURE,
        }
    }
}

fn write_errors<W: Write>(out: &mut W, errors: &FieldErrors) -> io::Result<()> {
    for (field, message) in errors.iter() {
        writeln!(out, "{field}: {message}")?;
    }
    Ok(())
}

/// Runs `command` against `cfg`, reading interactive input from `input` and writing to `out`.
fn execute<R: BufRead, W: Write>(
    command: Option<Commands>,
    cfg: CoreConfig,
    now: Option<DateTime<FixedOffset>>,
    input: R,
    mut out: W,
) -> anyhow::Result<Outcome> {
    match command {
        Some(Commands::Types) => {
            for t in AppointmentType::ALL {
                writeln!(out, "{:<18} {:<30} {}", t.code(), t.label(), t.description())?;
            }
        }
        Some(Commands::Validate { fields, json }) => {
            let fields = fields.load()?;
            let errors = validate_now(&fields, &cfg, now.as_ref());

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&errors)?)?;
            } else if errors.is_empty() {
                writeln!(out, "OK")?;
            } else {
                write_errors(&mut out, &errors)?;
            }

            if !errors.is_empty() {
                return Ok(Outcome::Invalid);
            }
        }
        Some(Commands::Summary { fields, json }) => {
            let mut session = FormSession::with_fields(cfg, fields.load()?);
            let result = match &now {
                Some(now) => session.generate_at(now),
                None => session.generate(),
            };

            match result {
                Ok(summary) if json => {
                    let body = serde_json::json!({ "summary": summary });
                    writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
                }
                Ok(summary) => writeln!(out, "{summary}")?,
                Err(FormError::Validation(errors)) => {
                    if json {
                        let body = serde_json::json!({ "errors": errors });
                        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
                    } else {
                        write_errors(&mut out, &errors)?;
                    }
                    return Ok(Outcome::Invalid);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Some(Commands::Interactive) => {
            let mut session = FormSession::new(cfg);
            interactive::run(&mut session, input, out, now)?;
        }
        None => {
            writeln!(out, "Use 'ghcc --help' for commands")?;
        }
    }

    Ok(Outcome::Success)
}

/// `RUST_LOG` directives with this workspace's crates raised to `info`.
fn log_filter() -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::from_default_env()
        .add_directive("ghcc_core=info".parse()?)
        .add_directive("ghcc_cli=info".parse()?))
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(log_filter()?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = resolve_config(&cli)?;
    tracing::info!(
        "date comparison: {}, date format: {}",
        cfg.date_comparison(),
        cfg.date_display_format()
    );

    let stdin = io::stdin();
    let outcome = execute(cli.command, cfg, cli.now, stdin.lock(), io::stdout())?;
    Ok(outcome.into())
}
