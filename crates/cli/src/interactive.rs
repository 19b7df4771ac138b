//! Line-oriented interactive session.
//!
//! Each input line is one of:
//! - `<field>=<value>`: apply a change (the value is kept exactly as typed after `=`)
//! - `generate`: validate and, on success, print the summary
//! - `show`: print current values and errors
//! - `reset`: start a new form
//! - `quit` / `exit`: leave (end of input does the same)

use chrono::{DateTime, FixedOffset};
use ghcc_core::{Field, FormError, FormSession};
use std::io::{self, BufRead, Write};

pub fn run<R: BufRead, W: Write>(
    session: &mut FormSession,
    input: R,
    mut output: W,
    now: Option<DateTime<FixedOffset>>,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let command = line.trim();

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "generate" => {
                let result = match &now {
                    Some(now) => session.generate_at(now),
                    None => session.generate(),
                };
                match result {
                    Ok(summary) => writeln!(output, "{summary}")?,
                    Err(FormError::Validation(errors)) => {
                        for (field, message) in errors.iter() {
                            writeln!(output, "{field}: {message}")?;
                        }
                    }
                    Err(e) => writeln!(output, "error: {e}")?,
                }
            }
            "show" => {
                for field in Field::ALL {
                    let value = session.fields().get(field);
                    match session.errors().get(field) {
                        Some(message) => writeln!(output, "{field} = {value:?} ({message})")?,
                        None => writeln!(output, "{field} = {value:?}")?,
                    }
                }
            }
            "reset" => {
                session.reset();
                writeln!(output, "form cleared")?;
            }
            _ => match line.split_once('=') {
                Some((name, value)) => {
                    if let Err(e) = session.apply_change_by_name(name.trim(), value) {
                        writeln!(output, "error: {e}")?;
                    }
                }
                None => writeln!(output, "unrecognised command: {command}")?,
            },
        }
    }

    Ok(())
}
