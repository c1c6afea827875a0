//! # Error Types — Validation Failures
//!
//! Every way an identity number can be rejected maps to exactly one
//! [`ValidationError`] variant. Each variant carries the input exactly as
//! the caller supplied it (whitespace included), so that the rendered
//! message points at what the user actually typed.
//!
//! ## Design
//!
//! - One variant per validation rule, in rule order.
//! - [`Reason`] is the `Copy` discriminant for callers that want to branch
//!   or serialize without holding the raw input.
//! - Rejection is terminal. Nothing in this crate retries or corrects input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rejected identity number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A character other than an ASCII digit remained after whitespace was removed.
    #[error("The value '{0}' contains nonnumeric characters.")]
    NotNumeric(String),

    /// Fewer than 13 digits.
    #[error("The value '{0}' is shorter than 13 digits.")]
    TooShort(String),

    /// More than 13 digits.
    #[error("The value '{0}' is longer than 13 digits.")]
    TooLong(String),

    /// The first six digits are not a calendar date in `yymmdd` form.
    #[error("The value '{0}' does not start with a date in the format 'yymmdd'.")]
    InvalidDate(String),

    /// The eleventh digit is neither `0` nor `1`.
    #[error("The value '{0}' does not have a valid citizenship classification.")]
    InvalidCitizenship(String),

    /// The Luhn checksum does not hold.
    #[error("The value '{0}' has an invalid checksum digit.")]
    InvalidChecksum(String),
}

impl ValidationError {
    /// Build the error for `reason`, echoing `raw`.
    pub fn new(reason: Reason, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match reason {
            Reason::NotNumeric => Self::NotNumeric(raw),
            Reason::TooShort => Self::TooShort(raw),
            Reason::TooLong => Self::TooLong(raw),
            Reason::InvalidDate => Self::InvalidDate(raw),
            Reason::InvalidCitizenship => Self::InvalidCitizenship(raw),
            Reason::InvalidChecksum => Self::InvalidChecksum(raw),
        }
    }

    /// The rule that rejected the input.
    pub fn reason(&self) -> Reason {
        match self {
            Self::NotNumeric(_) => Reason::NotNumeric,
            Self::TooShort(_) => Reason::TooShort,
            Self::TooLong(_) => Reason::TooLong,
            Self::InvalidDate(_) => Reason::InvalidDate,
            Self::InvalidCitizenship(_) => Reason::InvalidCitizenship,
            Self::InvalidChecksum(_) => Reason::InvalidChecksum,
        }
    }

    /// The input exactly as it was passed to the constructor.
    pub fn raw_input(&self) -> &str {
        match self {
            Self::NotNumeric(raw)
            | Self::TooShort(raw)
            | Self::TooLong(raw)
            | Self::InvalidDate(raw)
            | Self::InvalidCitizenship(raw)
            | Self::InvalidChecksum(raw) => raw,
        }
    }
}

/// Reason code for a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    NotNumeric,
    TooShort,
    TooLong,
    InvalidDate,
    InvalidCitizenship,
    InvalidChecksum,
}

impl Reason {
    /// Stable `snake_case` code, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotNumeric => "not_numeric",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::InvalidDate => "invalid_date",
            Self::InvalidCitizenship => "invalid_citizenship",
            Self::InvalidChecksum => "invalid_checksum",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
