//! # Fixture Tables
//!
//! Known-good and known-bad identity numbers, each expected to be accepted
//! or rejected for one specific reason. The valid set deliberately uses
//! irregular whitespace; the invalid sets are grouped by the rule they
//! violate and are well-formed with respect to every earlier rule.

use said_core::{strip_whitespace, Reason, SouthAfricanId};

const VALID: &[&str] = &[
    " 2406203 71009 7  ",
    "580717 9107 092",
    "7     903 1   11918098",
    "4711187297096",
    "55 03 25 23 02 09 4",
    "        0503190247091           ",
    "3203140849099",
    "1610030121094",
    "790927557  9097",
    "3206236908                  083",
];

const NON_NUMERIC: &[&str] = &[
    "123\u{0}567",
    "123a567",
    "1b345678",
    "12345c7890",
    "123d5678901",
    "123456789e12",
    "1234f678901234",
    "1g3456789012345",
    "1234h67890123456",
    "12345678i01234567",
    "12345678901j345678",
    "1234567890k23456789",
];

const TOO_SHORT: &[&str] = &[
    "1",
    "12",
    "123",
    "1234",
    "12345",
    "123456",
    "1234567",
    "12345678",
    "1234567890",
    "12345678901",
    "123456789012",
];

const TOO_LONG: &[&str] = &[
    "12345678901234",
    "123456789012345",
    "1234567890123456",
    "12345678901234567",
    "123456789012345678",
    "1234567890123456789",
    "12345678901234567890",
    "123456789012345678901",
    "1234567890123456789012",
    "12345678901234567890123",
    "123456789012345678901234",
    "1234567890123456789012345",
    "12345678901234567890123456",
];

const INVALID_DATE: &[&str] = &[
    "971305 2879 088",
    "841183 1148 083",
    "800638 2539 096",
    "733329 1928 084",
    "710991 8954 099",
    "584201 5865 085",
    "591068 1661 089",
    "286629 7495 093",
    "550348 2681 097",
    "479104 6415 096",
    "221034 3900 084",
    "677727 2870 092",
    "910389 4750 099",
];

const INVALID_CITIZENSHIP: &[&str] = &[
    "971205 2879 388",
    "841113 1148 283",
    "800628 2539 596",
    "730329 1928 684",
    "710921 8954 799",
    "581201 5865 885",
    "591008 1661 989",
    "280629 7495 293",
    "550308 2681 497",
    "470104 6415 596",
    "221024 3900 684",
    "670727 2870 792",
    "910329 4750 899",
];

const INVALID_CHECKSUM: &[&str] = &[
    "971205 2879 087",
    "841113 1148 082",
    "800628 2539 095",
    "730329 1928 083",
    "710921 8954 098",
    "581201 5865 084",
    "591008 1661 088",
    "280629 7495 092",
    "550308 2681 096",
    "470104 6415 095",
    "221024 3900 083",
    "670727 2870 091",
    "910329 4750 098",
];

fn assert_rejected(inputs: &[&str], expected: Reason) {
    for &input in inputs {
        match SouthAfricanId::new(input) {
            Ok(id) => panic!("{input:?} was accepted as {id}, expected {expected}"),
            Err(err) => {
                assert_eq!(err.reason(), expected, "{input:?}: {err}");
                assert_eq!(err.raw_input(), input);
                assert!(
                    err.to_string().contains(&format!("'{input}'")),
                    "message does not quote the raw input: {err}"
                );
            }
        }
    }
}

#[test]
fn accepts_valid_numbers() {
    for &input in VALID {
        let id = SouthAfricanId::new(input)
            .unwrap_or_else(|e| panic!("{input:?} rejected: {e}"));
        let digits = strip_whitespace(input);
        assert_eq!(id.as_str(), digits);
        assert_eq!(id.to_string().replace(' ', ""), digits);
    }
}

#[test]
fn valid_numbers_survive_copy_construction() {
    for &input in VALID {
        let id = SouthAfricanId::new(input).unwrap();
        assert_eq!(SouthAfricanId::new(&id).unwrap(), id);
        assert_eq!(SouthAfricanId::new(id.to_string()).unwrap(), id);
    }
}

#[test]
fn rejects_non_numeric() {
    assert_rejected(NON_NUMERIC, Reason::NotNumeric);
}

#[test]
fn rejects_too_short() {
    assert_rejected(TOO_SHORT, Reason::TooShort);
}

#[test]
fn rejects_too_long() {
    assert_rejected(TOO_LONG, Reason::TooLong);
}

#[test]
fn rejects_invalid_date() {
    assert_rejected(INVALID_DATE, Reason::InvalidDate);
}

#[test]
fn rejects_invalid_citizenship() {
    assert_rejected(INVALID_CITIZENSHIP, Reason::InvalidCitizenship);
}

#[test]
fn rejects_invalid_checksum() {
    assert_rejected(INVALID_CHECKSUM, Reason::InvalidChecksum);
}

#[test]
fn decodes_documented_examples() {
    let id = SouthAfricanId::new("4608162219097").unwrap();
    assert_eq!((id.birth_year(), id.birth_month(), id.birth_day()), ("46", "08", "16"));
    assert!(id.is_female());

    assert!(SouthAfricanId::new("8202277454090").unwrap().is_male());
    assert!(SouthAfricanId::new("6510224960080").unwrap().is_citizen());
    assert_eq!(
        SouthAfricanId::new("5503252302193").unwrap().to_string(),
        "550325 2302 193"
    );
}
