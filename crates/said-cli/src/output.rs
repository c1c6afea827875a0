//! # Output Format
//!
//! Shared `--format` flag for subcommands that print results.

use clap::ValueEnum;
use serde::Serialize;

/// How results are written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Serialize `value` as a single line of JSON.
pub fn json_line<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string(value)?)
}
