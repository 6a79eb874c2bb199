use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::PassportError;

/// Settings for [`crate::PassportReader`].
///
/// Loaded from a JSON file; every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Also search the OCR text as one block when no MRZ line pair is found.
    pub block_fallback: bool,
    /// Records scoring below this are logged as low confidence.
    pub min_confidence: u8,
    /// Fixed reference date for the birth year pivot and expiry checks.
    /// Today's local date when unset.
    pub reference_date: Option<NaiveDate>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig {
            block_fallback: true,
            min_confidence: 70,
            reference_date: None,
        }
    }
}

impl ReaderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PassportError> {
        let contents = fs::read_to_string(&path)?;
        let config: ReaderConfig = serde_json::from_str(&contents).map_err(|e| {
            PassportError::ConfigError(format!("{}: {}", path.as_ref().display(), e))
        })?;

        if config.min_confidence > 100 {
            return Err(PassportError::ConfigError(format!(
                "min_confidence must be between 0 and 100, got {}",
                config.min_confidence
            )));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_for_missing_keys() {
        let file = write_config("{}");
        let config = ReaderConfig::from_file(file.path()).unwrap();
        assert_eq!(config, ReaderConfig::default());
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            r#"{ "block_fallback": false, "min_confidence": 85, "reference_date": "2026-01-31" }"#,
        );
        let config = ReaderConfig::from_file(file.path()).unwrap();

        assert!(!config.block_fallback);
        assert_eq!(config.min_confidence, 85);
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2026, 1, 31));
    }

    #[test]
    fn test_rejects_out_of_range_confidence() {
        let file = write_config(r#"{ "min_confidence": 150 }"#);
        assert!(matches!(
            ReaderConfig::from_file(file.path()),
            Err(PassportError::ConfigError(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let file = write_config("block_fallback = true");
        assert!(matches!(
            ReaderConfig::from_file(file.path()),
            Err(PassportError::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            ReaderConfig::from_file("/nonexistent/mrzscan.json"),
            Err(PassportError::IoError(_))
        ));
    }
}
