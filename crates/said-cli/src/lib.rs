//! # said-cli — South African Identity Number Command-Line Interface
//!
//! Thin clap front end over `said-core`. Validation, decoding, and checksum
//! logic all live in the core crate; the handlers here only read input,
//! call into it, and render the result.
//!
//! ## Subcommands
//!
//! - `validate` — Validate identity numbers from arguments or stdin
//! - `decode` — Print the decoded fields of one identity number
//! - `check-digit` — Compute the Luhn check digit for a 12-digit payload
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handlers write to a caller-supplied `Write` so they can be tested
//!   without a terminal.

pub mod check_digit;
pub mod decode;
pub mod output;
pub mod validate;
