use chrono::{Datelike, NaiveDate};

/// Which MRZ date field a `YYMMDD` value came from. Decides the century.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateKind {
    Birth,
    Expiry,
}

/// Convert an MRZ date (`YYMMDD`) to `YYYY-MM-DD`.
///
/// Returns an empty string when the field is not exactly six digits. The
/// month and day are copied through without calendar validation.
///
/// Birth years greater than the two-digit year of `today` land in the 1900s,
/// everything else in the 2000s. The pivot moves with the calendar, so the
/// same MRZ can normalize differently depending on when it is read; this is
/// the business rule the order forms were built against and is kept as-is.
/// Expiry years are always in the 2000s.
pub fn mrz_date_to_iso(raw: &str, kind: DateKind, today: NaiveDate) -> String {
    if raw.chars().count() != 6 || !raw.chars().all(|c| c.is_ascii_digit()) {
        return String::new();
    }

    let yy: i32 = match raw[0..2].parse() {
        Ok(yy) => yy,
        Err(_) => return String::new(),
    };
    let mm = &raw[2..4];
    let dd = &raw[4..6];

    let yyyy = match kind {
        DateKind::Birth => {
            let current_year_short = today.year() % 100;
            if yy > current_year_short {
                1900 + yy
            } else {
                2000 + yy
            }
        }
        DateKind::Expiry => 2000 + yy,
    };

    format!("{}-{}-{}", yyyy, mm, dd)
}

/// Parse a normalized `YYYY-MM-DD` string into a calendar date.
pub fn parse_iso_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Convert `DD/MM/YYYY` to `YYYY-MM-DD`. Anything else passes through.
pub fn ddmmyyyy_to_iso(date: &str) -> String {
    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() != 3 {
        return date.to_string();
    }
    format!("{}-{}-{}", parts[2], parts[1], parts[0])
}

/// Convert `YYYY-MM-DD` to `DD/MM/YYYY` (the format e-visa portals expect).
/// Anything else passes through.
pub fn iso_to_ddmmyyyy(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 {
        return date.to_string();
    }
    format!("{}/{}/{}", parts[2], parts[1], parts[0])
}
