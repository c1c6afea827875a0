//! # said-core — South African Identity Numbers
//!
//! Validates and decodes the 13-digit identity number issued by the South
//! African Department of Home Affairs.
//!
//! ## Key Design Principles
//!
//! 1. **Construction is validation.** [`SouthAfricanId::new`] is the only
//!    way to obtain a value. If it returns `Ok`, every accessor is
//!    infallible.
//!
//! 2. **Ordered, fail-fast rules.** Numeric, minimum length, maximum
//!    length, date, citizenship, checksum, in that order. The first
//!    failure is the reported [`Reason`].
//!
//! 3. **Errors quote the caller.** Every [`ValidationError`] carries the
//!    raw input exactly as supplied, whitespace and all.
//!
//! 4. **ASCII whitespace is not significant.** `"4608162219097"` and
//!    `"46 0816 2219097"` are the same identity number. Unicode spaces
//!    such as U+00A0 are not stripped and fail the numeric rule.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No I/O. Rejections are logged at `debug` through `tracing` and
//!   otherwise returned to the caller.

pub mod date;
pub mod error;
pub mod identity;
pub mod luhn;
pub mod rules;

pub use error::{Reason, ValidationError};
pub use identity::{is_separator, strip_whitespace, Citizenship, Gender, IdSummary, SouthAfricanId};
