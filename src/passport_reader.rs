use crate::config::ReaderConfig;
use crate::models::*;
use crate::processing::*;
use crate::utils::PassportError;
use crate::validation::*;
use chrono::{Local, NaiveDate};
use log::{debug, warn};
use std::fs;
use std::path::Path;

pub struct PassportReader {
    config: ReaderConfig,
}

impl PassportReader {
    pub fn new(config: ReaderConfig) -> Self {
        PassportReader { config }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Date used for the birth year pivot and the expiry check.
    pub fn reference_date(&self) -> NaiveDate {
        self.config
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    // Two MRZ lines typed in by hand
    pub fn read_lines(&self, line1: &str, line2: &str) -> Option<PassportData> {
        let data = parse_mrz_at(line1, line2, self.reference_date())?;
        self.check_confidence(&data);
        Some(data)
    }

    // Full OCR output of a passport photo
    pub fn read_text(&self, text: &str) -> PassportExtractionResult {
        let today = self.reference_date();

        // Step 1: block-aware extraction, which also catches merged lines
        if self.config.block_fallback {
            if let Some(lines) = extract_mrz_from_blocks(text) {
                if let Some(data) = parse_mrz_at(&lines.line1, &lines.line2, today) {
                    self.check_confidence(&data);
                    return PassportExtractionResult::parsed(text, data);
                }
                debug!("Block extraction found lines that did not decode, retrying line search");
            }
        }

        // Step 2: plain line search
        let result = parse_passport_from_text_at(text, today);
        if let Some(data) = result.data() {
            self.check_confidence(data);
        }
        result
    }

    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<PassportExtractionResult, PassportError> {
        let text = fs::read_to_string(&path)?;
        debug!("Read {} bytes of OCR text from {}", text.len(), path.as_ref().display());
        Ok(self.read_text(&text))
    }

    /// Run the record checks against the reader's reference date.
    pub fn validate(&self, data: &PassportData) -> (MrzValidationResult, ExpiryValidationResult) {
        (
            MrzValidator::validate(data),
            ExpiryValidator::validate(data, self.reference_date()),
        )
    }

    fn check_confidence(&self, data: &PassportData) {
        if data.confidence < self.config.min_confidence {
            warn!(
                "Low MRZ confidence {} for passport '{}' (threshold {})",
                data.confidence, data.passport_number, self.config.min_confidence
            );
        }
    }
}

impl Default for PassportReader {
    fn default() -> Self {
        PassportReader::new(ReaderConfig::default())
    }
}
