use chrono::{Local, NaiveDate};
use log::info;

use crate::models::{ExtractionFailure, PassportExtractionResult};
use crate::processing::extractors::extract_mrz_from_text;
use crate::processing::mrz::parse_mrz_at;

/// Read passport data from a full OCR text: locate the MRZ, then decode it.
///
/// Never fails hard. The returned result always carries `text` so callers
/// can show it when nothing could be read.
pub fn parse_passport_from_text(text: &str) -> PassportExtractionResult {
    parse_passport_from_text_at(text, Local::now().date_naive())
}

pub fn parse_passport_from_text_at(text: &str, today: NaiveDate) -> PassportExtractionResult {
    let lines = match extract_mrz_from_text(text) {
        Some(lines) => lines,
        None => {
            info!("No MRZ-shaped lines in {} characters of OCR text", text.len());
            return PassportExtractionResult::failed(text, ExtractionFailure::NoMrzFound);
        }
    };

    match parse_mrz_at(&lines.line1, &lines.line2, today) {
        Some(data) => PassportExtractionResult::parsed(text, data),
        None => {
            info!("MRZ-shaped lines found but not a passport: {}", lines.line1);
            PassportExtractionResult::failed(text, ExtractionFailure::UnparseableMrz)
        }
    }
}
