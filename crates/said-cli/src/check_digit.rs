//! # Check-Digit Subcommand
//!
//! Computes the Luhn digit that completes a 12-digit payload.

use std::io::Write;

use anyhow::bail;
use clap::Args;
use said_core::{luhn, strip_whitespace, SouthAfricanId};

/// Arguments for the check-digit subcommand.
#[derive(Args, Debug)]
pub struct CheckDigitArgs {
    /// First 12 digits of an identity number. ASCII whitespace is ignored.
    pub payload: String,
}

/// Write the check digit for `args.payload` to `out`.
///
/// The payload is only required to be 12 digits. If the completed number
/// would still fail validation (bad date, bad citizenship digit), the
/// digit is printed anyway and the problem is logged as a warning.
pub fn run<W: Write>(args: &CheckDigitArgs, out: &mut W) -> anyhow::Result<u8> {
    let payload = strip_whitespace(&args.payload);
    if payload.len() != SouthAfricanId::SIZE - 1 {
        bail!(
            "payload '{}' must be {} digits, got {}",
            args.payload,
            SouthAfricanId::SIZE - 1,
            payload.len()
        );
    }
    let Some(digit) = luhn::check_digit(&payload) else {
        bail!("payload '{}' contains nonnumeric characters", args.payload);
    };

    if let Err(err) = SouthAfricanId::new(format!("{payload}{digit}")) {
        tracing::warn!(reason = %err.reason(), "completed number is still not a valid identity number");
    }

    writeln!(out, "{digit}")?;
    Ok(digit)
}
