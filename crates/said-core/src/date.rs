//! # Birth Date Segment — `yymmdd`
//!
//! The first six digits of an identity number are the holder's birth date
//! with a two-digit year. The century is not encoded anywhere in the number,
//! so validation reads `YY` literally as a year of the proleptic Gregorian
//! calendar (year `00`..`99`). For those years the Gregorian leap rule
//! reduces to `YY % 4 == 0`: `00` counts as a leap year because year 0 is
//! divisible by 400, and no other two-digit year is a century.
//!
//! Consequently `000229`, `040229`, and `960229` are accepted while
//! `010229` and `990229` are not.

use chrono::NaiveDate;

/// Parse a six-digit `yymmdd` segment into a date in years 0–99.
///
/// Returns `None` unless `segment` is exactly six ASCII digits forming a
/// real calendar date (month 01–12, day within that month's length).
pub fn parse_yymmdd(segment: &str) -> Option<NaiveDate> {
    parse_with_century(segment, 0)
}

/// Parse a `yymmdd` segment, placing `YY` in the given century.
///
/// `century` is the hundreds part of the year, so `19` with `"840312"`
/// yields 1984-03-12. The same segment may be valid in one century and not
/// in another (`000229` exists in 2000 but not in 1900).
pub fn parse_with_century(segment: &str, century: u16) -> Option<NaiveDate> {
    if segment.len() != 6 || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let yy: i32 = segment[0..2].parse().ok()?;
    let month: u32 = segment[2..4].parse().ok()?;
    let day: u32 = segment[4..6].parse().ok()?;
    NaiveDate::from_ymd_opt(i32::from(century) * 100 + yy, month, day)
}
