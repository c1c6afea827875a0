//! # South African Identity Number
//!
//! [`SouthAfricanId`] is a self-validating value type. Construction is the
//! only way in: the raw string is stripped of whitespace, run through the
//! ordered rules in [`crate::rules`], and kept only if every rule passes.
//! All accessors are plain slices over the stored 13 digits.
//!
//! ## Layout
//!
//! ```text
//! 550325 2302 1 9 3
//! |      |    | | +-- checksum (Luhn)
//! |      |    | +---- race (unused)
//! |      |    +------ citizenship: 0 citizen, 1 permanent resident
//! |      +----------- gender sequence
//! +------------------ birth date, yymmdd
//! ```
//!
//! Gender sequence numbers below 5000 are female, 5000 and above male.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::rules;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Whether `c` is dropped during normalization.
///
/// Only ASCII whitespace counts: space, tab, line feed, vertical tab, form
/// feed, and carriage return. Unicode spaces such as U+00A0 are kept and
/// then fail the numeric rule.
pub fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\u{0B}'
}

/// `raw` with every [`is_separator`] character removed.
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|&c| !is_separator(c)).collect()
}

/// A validated South African identity number.
///
/// Holds the 13 normalized digits. Two values are equal when their digits
/// are equal, regardless of how the original inputs were spaced.
///
/// ```
/// use said_core::SouthAfricanId;
///
/// let id = SouthAfricanId::new("46 0816 2219097").unwrap();
/// assert_eq!(id.birth_month(), "08");
/// assert!(id.is_female());
/// assert_eq!(id.to_string(), "460816 2219 097");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SouthAfricanId(String);

impl_validating_deserialize!(SouthAfricanId);

impl SouthAfricanId {
    /// Exact number of digits, excluding whitespace.
    pub const SIZE: usize = rules::SIZE;

    /// Format of the birth date the number starts with.
    pub const DATE_FORMAT: &'static str = "yymmdd";

    /// Gender sequence numbers at or above this value are male.
    pub const GENDER_CUTOFF: u16 = 5000;

    /// Citizenship digit of a South African citizen.
    pub const CITIZEN: char = '0';

    /// Citizenship digit of a permanent resident.
    pub const PERMANENT_RESIDENT: char = '1';

    /// Validate `value` and wrap its digits.
    ///
    /// ASCII whitespace is removed first (see [`is_separator`]); no other
    /// character is altered. Passing `&other` for an existing id re-validates its display form.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first failing rule. Its
    /// message quotes `value` exactly as given.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let normalized = strip_whitespace(&raw);

        if let Some(reason) = rules::first_failure(&normalized) {
            tracing::debug!(%reason, len = raw.len(), "rejected identity number");
            return Err(ValidationError::new(reason, raw));
        }

        tracing::trace!("accepted identity number");
        Ok(Self(normalized))
    }

    /// The 13 digits with no separators.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits 1–6: birth date as `yymmdd`.
    pub fn date_segment(&self) -> &str {
        &self.0[0..6]
    }

    /// Digits 7–10: gender sequence number.
    pub fn gender_segment(&self) -> &str {
        &self.0[6..10]
    }

    /// Digit 11: citizenship classification.
    pub fn citizenship_segment(&self) -> &str {
        &self.0[10..11]
    }

    /// Digit 12: formerly race, no longer assigned meaning.
    pub fn race_segment(&self) -> &str {
        &self.0[11..12]
    }

    /// Digit 13: Luhn check digit.
    pub fn checksum_segment(&self) -> &str {
        &self.0[12..13]
    }

    /// Two-digit birth year. `"84"` may mean 1984 or 1884.
    pub fn birth_year(&self) -> &str {
        &self.date_segment()[0..2]
    }

    /// Two-digit birth month, January being `"01"`.
    pub fn birth_month(&self) -> &str {
        &self.date_segment()[2..4]
    }

    /// Two-digit day of the month, the first being `"01"`.
    pub fn birth_day(&self) -> &str {
        &self.date_segment()[4..6]
    }

    /// Full birth date, given the century the holder was born in.
    ///
    /// Returns `None` if the date does not exist in that century, which
    /// only happens for 29 February in a non-leap century year.
    pub fn birth_date_in_century(&self, century: u16) -> Option<NaiveDate> {
        crate::date::parse_with_century(self.date_segment(), century)
    }

    pub fn is_female(&self) -> bool {
        self.gender_sequence() < Self::GENDER_CUTOFF
    }

    pub fn is_male(&self) -> bool {
        !self.is_female()
    }

    pub fn gender(&self) -> Gender {
        if self.is_female() {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    pub fn is_citizen(&self) -> bool {
        self.citizenship_digit() == Self::CITIZEN
    }

    pub fn is_permanent_resident(&self) -> bool {
        self.citizenship_digit() == Self::PERMANENT_RESIDENT
    }

    pub fn citizenship(&self) -> Citizenship {
        if self.is_citizen() {
            Citizenship::Citizen
        } else {
            Citizenship::PermanentResident
        }
    }

    /// Serializable breakdown of every decoded field.
    pub fn summary(&self) -> IdSummary {
        IdSummary {
            id: self.to_string(),
            birth_year: self.birth_year().to_string(),
            birth_month: self.birth_month().to_string(),
            birth_day: self.birth_day().to_string(),
            gender: self.gender(),
            citizenship: self.citizenship(),
            race: self.race_segment().to_string(),
            checksum: self.checksum_segment().to_string(),
        }
    }

    fn gender_sequence(&self) -> u16 {
        self.gender_segment()
            .bytes()
            .fold(0, |n, b| n * 10 + u16::from(b - b'0'))
    }

    fn citizenship_digit(&self) -> char {
        char::from(self.0.as_bytes()[10])
    }
}

impl std::fmt::Display for SouthAfricanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}{}{}",
            self.date_segment(),
            self.gender_segment(),
            self.citizenship_segment(),
            self.race_segment(),
            self.checksum_segment()
        )
    }
}

impl std::str::FromStr for SouthAfricanId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for SouthAfricanId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for SouthAfricanId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Display form, so that `SouthAfricanId::new(&id)` copy-constructs.
impl From<&SouthAfricanId> for String {
    fn from(id: &SouthAfricanId) -> Self {
        id.to_string()
    }
}

impl AsRef<str> for SouthAfricanId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Gender encoded in digits 7–10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
}

/// Citizenship classification encoded in digit 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Citizenship {
    Citizen,
    PermanentResident,
}

/// Decoded fields of a [`SouthAfricanId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdSummary {
    /// Display form, e.g. `550325 2302 193`.
    pub id: String,
    pub birth_year: String,
    pub birth_month: String,
    pub birth_day: String,
    pub gender: Gender,
    pub citizenship: Citizenship,
    pub race: String,
    pub checksum: String,
}
