//! # Validate Subcommand
//!
//! Validates one or more identity numbers. Numbers come from the command
//! line, or one per line from stdin when none are given. Blank stdin lines
//! are skipped.

use std::io::{BufRead, Write};

use clap::Args;
use said_core::{is_separator, Reason, SouthAfricanId};
use serde::Serialize;

use crate::output::{json_line, OutputFormat};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Identity numbers to validate. Reads stdin when omitted.
    pub ids: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Result of validating a single input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Outcome {
    pub fn of(input: &str) -> Self {
        match SouthAfricanId::new(input) {
            Ok(id) => Self {
                input: input.to_string(),
                valid: true,
                id: Some(id.to_string()),
                reason: None,
                message: None,
            },
            Err(err) => Self {
                input: input.to_string(),
                valid: false,
                id: None,
                reason: Some(err.reason()),
                message: Some(err.to_string()),
            },
        }
    }

    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Json => json_line(self),
            OutputFormat::Text => Ok(match (&self.id, &self.message) {
                (Some(id), _) => format!("{id}\tok"),
                (None, Some(message)) => format!("{}\t{message}", self.input),
                (None, None) => format!("{}\tinvalid", self.input),
            }),
        }
    }
}

/// Validate every input and write one line per result.
///
/// Returns `true` if every input was valid.
pub fn run<R: BufRead, W: Write>(
    args: &ValidateArgs,
    stdin: R,
    out: &mut W,
) -> anyhow::Result<bool> {
    let inputs = if args.ids.is_empty() {
        read_lines(stdin)?
    } else {
        args.ids.clone()
    };

    let mut all_valid = true;
    for input in &inputs {
        let outcome = Outcome::of(input);
        all_valid &= outcome.valid;
        writeln!(out, "{}", outcome.render(args.format)?)?;
    }

    tracing::info!(
        checked = inputs.len(),
        all_valid,
        "validation finished"
    );
    Ok(all_valid)
}

fn read_lines<R: BufRead>(reader: R) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.chars().all(is_separator) {
            lines.push(line);
        }
    }
    Ok(lines)
}
