//! # Luhn Checksum
//!
//! Mod-10 error-detecting code used for the final digit of an identity
//! number. Walking from the rightmost digit leftward, every second digit
//! (starting with the one immediately left of the check digit) is doubled
//! and reduced by 9 when the result exceeds 9. The number is valid when
//! the total, check digit included, is divisible by 10.
//!
//! This detects single-digit errors and most adjacent transpositions. It
//! offers no protection against deliberate forgery.

/// Sum of the Luhn-weighted digits, or `None` if a non-digit is present.
///
/// `double_first` selects whether the rightmost digit of `digits` is
/// doubled: false for a complete number, true for a payload still missing
/// its check digit.
fn weighted_sum(digits: &str, double_first: bool) -> Option<u32> {
    digits
        .chars()
        .rev()
        .enumerate()
        .try_fold(0u32, |sum, (i, c)| {
            let mut d = c.to_digit(10)?;
            if (i % 2 == 1) != double_first {
                d *= 2;
                if d > 9 {
                    d -= 9;
                }
            }
            Some(sum + d)
        })
}

/// Whether `digits` (check digit last) satisfies the Luhn checksum.
///
/// Returns `false` for empty input or any non-digit character.
pub fn is_valid(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }
    matches!(weighted_sum(digits, false), Some(sum) if sum % 10 == 0)
}

/// The check digit that makes `payload` followed by it pass [`is_valid`].
///
/// Returns `None` for empty input or any non-digit character.
pub fn check_digit(payload: &str) -> Option<u8> {
    if payload.is_empty() {
        return None;
    }
    let sum = weighted_sum(payload, true)?;
    Some(((10 - sum % 10) % 10) as u8)
}
