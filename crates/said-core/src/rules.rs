//! # Validation Rules
//!
//! The fixed, ordered rule table applied to a whitespace-stripped identity
//! number. Rules run top to bottom and stop at the first failure, so the
//! reported [`Reason`] is deterministic: a value that is both non-numeric
//! and too short is always reported as [`Reason::NotNumeric`].
//!
//! Later rules may assume everything earlier rules checked. The date,
//! citizenship, and checksum predicates only ever see 13 ASCII digits.

use crate::date;
use crate::error::Reason;
use crate::luhn;

/// Number of digits in a well-formed identity number.
pub const SIZE: usize = 13;

/// A single named check. `fails` receives the normalized value.
#[derive(Clone, Copy)]
pub struct Rule {
    pub reason: Reason,
    pub fails: fn(&str) -> bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("reason", &self.reason).finish()
    }
}

/// Every rule, in evaluation order.
pub const RULES: [Rule; 6] = [
    Rule {
        reason: Reason::NotNumeric,
        fails: not_numeric,
    },
    Rule {
        reason: Reason::TooShort,
        fails: too_short,
    },
    Rule {
        reason: Reason::TooLong,
        fails: too_long,
    },
    Rule {
        reason: Reason::InvalidDate,
        fails: invalid_date,
    },
    Rule {
        reason: Reason::InvalidCitizenship,
        fails: invalid_citizenship,
    },
    Rule {
        reason: Reason::InvalidChecksum,
        fails: invalid_checksum,
    },
];

/// The reason of the first rule `normalized` fails, if any.
pub fn first_failure(normalized: &str) -> Option<Reason> {
    RULES
        .iter()
        .find(|rule| (rule.fails)(normalized))
        .map(|rule| rule.reason)
}

// Empty input counts as non-numeric.
fn not_numeric(value: &str) -> bool {
    value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit())
}

fn too_short(value: &str) -> bool {
    value.len() < SIZE
}

fn too_long(value: &str) -> bool {
    value.len() > SIZE
}

fn invalid_date(value: &str) -> bool {
    value
        .get(0..6)
        .and_then(date::parse_yymmdd)
        .is_none()
}

fn invalid_citizenship(value: &str) -> bool {
    !matches!(value.get(10..11), Some("0") | Some("1"))
}

fn invalid_checksum(value: &str) -> bool {
    !luhn::is_valid(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_are_declared_in_precedence_order() {
        let order: Vec<Reason> = RULES.iter().map(|r| r.reason).collect();
        assert_eq!(
            order,
            vec![
                Reason::NotNumeric,
                Reason::TooShort,
                Reason::TooLong,
                Reason::InvalidDate,
                Reason::InvalidCitizenship,
                Reason::InvalidChecksum,
            ]
        );
    }

    #[test]
    fn valid_number_passes_every_rule() {
        assert_eq!(first_failure("5503252302193"), None);
    }

    #[test]
    fn numeric_rule_wins_over_length() {
        assert_eq!(first_failure("123a567"), Some(Reason::NotNumeric));
        assert_eq!(first_failure("1234f678901234"), Some(Reason::NotNumeric));
        assert_eq!(first_failure(""), Some(Reason::NotNumeric));
    }

    #[test]
    fn nul_byte_is_not_numeric() {
        assert_eq!(first_failure("123\u{0}567"), Some(Reason::NotNumeric));
    }

    #[test]
    fn non_ascii_digits_are_not_numeric() {
        // Arabic-Indic digits are numeric in Unicode but not ASCII.
        assert_eq!(first_failure("\u{0661}\u{0662}\u{0663}"), Some(Reason::NotNumeric));
    }

    #[test]
    fn length_rules() {
        assert_eq!(first_failure("123456789012"), Some(Reason::TooShort));
        assert_eq!(first_failure("12345678901234"), Some(Reason::TooLong));
    }

    #[test]
    fn date_precedes_citizenship_and_checksum() {
        // Bad month, bad citizenship digit, and bad check digit at once.
        assert_eq!(first_failure("9713052879387"), Some(Reason::InvalidDate));
    }

    #[test]
    fn citizenship_precedes_checksum() {
        assert_eq!(first_failure("9712052879387"), Some(Reason::InvalidCitizenship));
    }

    #[test]
    fn checksum_rule() {
        assert_eq!(first_failure("9712052879087"), Some(Reason::InvalidChecksum));
    }

    #[test]
    fn rule_debug_shows_reason() {
        assert_eq!(format!("{:?}", RULES[0]), "Rule { reason: NotNumeric }");
    }
}
