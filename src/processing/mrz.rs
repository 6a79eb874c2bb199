//! TD3 (passport) MRZ decoding.
//!
//! A TD3 zone is two lines of 44 characters:
//!
//! ```text
//! P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<
//! L898902C36UTO7408122F1204159ZE184226B<<<<<10
//! ```

use std::ops::Range;

use chrono::{Local, NaiveDate};
use log::{debug, warn};

use crate::models::{country_name, CheckDigitResults, Gender, PassportData};
use crate::utils::{mrz_date_to_iso, DateKind};
use crate::validation::checksum::{validate_check_digit, FILLER};
use crate::validation::confidence::{confidence_score, Penalty};

pub const TD3_LINE_LENGTH: usize = 44;
pub const PASSPORT_MARKER: char = 'P';

// Line 1
pub const ISSUING_COUNTRY: Range<usize> = 2..5;
pub const NAME: Range<usize> = 5..44;

// Line 2
pub const PASSPORT_NUMBER: Range<usize> = 0..9;
pub const PASSPORT_NUMBER_CHECK: usize = 9;
pub const NATIONALITY: Range<usize> = 10..13;
pub const DATE_OF_BIRTH: Range<usize> = 13..19;
pub const DATE_OF_BIRTH_CHECK: usize = 19;
pub const SEX: usize = 20;
pub const EXPIRY_DATE: Range<usize> = 21..27;
pub const EXPIRY_DATE_CHECK: usize = 27;
pub const PERSONAL_NUMBER: Range<usize> = 28..42;

const NAME_SEPARATOR: &str = "<<";

/// Parse a TD3 MRZ using today's local date for the birth year pivot.
///
/// Returns `None` when line 1 does not start with the passport marker.
pub fn parse_mrz(line1: &str, line2: &str) -> Option<PassportData> {
    parse_mrz_at(line1, line2, Local::now().date_naive())
}

/// Parse a TD3 MRZ with an explicit reference date for the birth year pivot.
pub fn parse_mrz_at(line1: &str, line2: &str, today: NaiveDate) -> Option<PassportData> {
    let line1 = normalize_line(line1);
    let line2 = normalize_line(line2);

    if line1.first() != Some(&PASSPORT_MARKER) {
        debug!("Not a passport MRZ, line 1 starts with {:?}", line1.first());
        return None;
    }

    // Line 1: P<ISSSURNAME<<GIVEN<NAMES<<<<<<<<<<<<<<<<
    let issuing_country_raw = field(&line1, ISSUING_COUNTRY);
    let issuing_country_code = strip_filler(&issuing_country_raw);

    let name_field = field(&line1, NAME);
    let mut name_parts = name_field.split(NAME_SEPARATOR);
    let surname = clean_name(name_parts.next().unwrap_or(""));
    let given_names = clean_name(&name_parts.collect::<Vec<_>>().join(" "));

    // Line 2: NNNNNNNNNCNNNBBBBBBCSEEEEEECPPPPPPPPPPPPPPCC
    let passport_number_field = field(&line2, PASSPORT_NUMBER);
    let passport_number = strip_filler(&passport_number_field);
    let nationality_raw = field(&line2, NATIONALITY);
    let nationality_code = strip_filler(&nationality_raw);
    let date_of_birth_raw = field(&line2, DATE_OF_BIRTH);
    let gender_raw = line2[SEX];
    let expiry_date_raw = field(&line2, EXPIRY_DATE);
    let personal_number = strip_filler(&field(&line2, PERSONAL_NUMBER)).trim().to_string();

    let check_digits = CheckDigitResults {
        passport_number: validate_check_digit(&passport_number_field, line2[PASSPORT_NUMBER_CHECK]),
        date_of_birth: validate_check_digit(&date_of_birth_raw, line2[DATE_OF_BIRTH_CHECK]),
        expiry_date: validate_check_digit(&expiry_date_raw, line2[EXPIRY_DATE_CHECK]),
    };

    let mut penalties = vec![Penalty::FailedCheckDigit; check_digits.failed_count()];
    if surname.is_empty() && given_names.is_empty() {
        penalties.push(Penalty::MissingName);
    }
    if passport_number.is_empty() {
        penalties.push(Penalty::MissingPassportNumber);
    }
    let confidence = confidence_score(&penalties);

    if !check_digits.all_valid() {
        warn!(
            "MRZ check digit mismatch (passport number: {}, birth date: {}, expiry date: {})",
            check_digits.passport_number, check_digits.date_of_birth, check_digits.expiry_date
        );
    }

    let full_name = format!("{} {}", given_names, surname).trim().to_string();

    let data = PassportData {
        full_name,
        passport_number,
        nationality: country_name(&nationality_raw, &nationality_code),
        nationality_code,
        date_of_birth: mrz_date_to_iso(&date_of_birth_raw, DateKind::Birth, today),
        date_of_birth_raw,
        gender: Gender::from_mrz(gender_raw),
        gender_raw: gender_raw.to_string(),
        expiry_date: mrz_date_to_iso(&expiry_date_raw, DateKind::Expiry, today),
        expiry_date_raw,
        issuing_country: country_name(&issuing_country_raw, &issuing_country_code),
        issuing_country_code,
        personal_number: if personal_number.is_empty() {
            None
        } else {
            Some(personal_number)
        },
        check_digits,
        mrz_line1: line1.iter().collect(),
        mrz_line2: line2.iter().collect(),
        confidence,
        surname,
        given_names,
    };

    debug!(
        "Parsed MRZ: {} / {} / {} (confidence {})",
        data.full_name, data.passport_number, data.nationality_code, data.confidence
    );

    Some(data)
}

/// Uppercase, turn whitespace into filler (OCR reads `<` as spaces) and pad
/// to a full TD3 line.
fn normalize_line(line: &str) -> Vec<char> {
    let mut chars: Vec<char> = line
        .to_uppercase()
        .chars()
        .map(|c| if c.is_whitespace() { FILLER } else { c })
        .collect();
    if chars.len() < TD3_LINE_LENGTH {
        chars.resize(TD3_LINE_LENGTH, FILLER);
    }
    chars
}

fn field(line: &[char], range: Range<usize>) -> String {
    line[range].iter().collect()
}

fn strip_filler(value: &str) -> String {
    value.chars().filter(|c| *c != FILLER).collect()
}

/// Filler becomes a space, runs of spaces collapse, ends are trimmed.
fn clean_name(raw: &str) -> String {
    raw.replace(FILLER, " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
