use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Holder sex as printed in the MRZ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// `M` and `F` map to their values, every other character (`X`, `<`,
    /// OCR noise) is `Other`.
    pub fn from_mrz(raw: char) -> Self {
        match raw {
            'M' => Gender::Male,
            'F' => Gender::Female,
            _ => Gender::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }
}

/// The two text lines of a TD3 machine readable zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MrzLines {
    pub line1: String,
    pub line2: String,
}

impl MrzLines {
    pub fn new(line1: impl Into<String>, line2: impl Into<String>) -> Self {
        MrzLines {
            line1: line1.into(),
            line2: line2.into(),
        }
    }
}

/// Outcome of the three check digits on line 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDigitResults {
    pub passport_number: bool,
    pub date_of_birth: bool,
    pub expiry_date: bool,
}

impl CheckDigitResults {
    pub fn all_valid(&self) -> bool {
        self.passport_number && self.date_of_birth && self.expiry_date
    }

    pub fn failed_count(&self) -> usize {
        [self.passport_number, self.date_of_birth, self.expiry_date]
            .iter()
            .filter(|valid| !**valid)
            .count()
    }
}

/// Structured data decoded from a passport MRZ.
///
/// Every field is populated. Text fields that could not be read are empty
/// strings, normalized dates that could not be read are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassportData {
    pub surname: String,
    pub given_names: String,
    pub full_name: String,
    pub passport_number: String,
    pub nationality: String,
    pub nationality_code: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    /// `YYMMDD`
    pub date_of_birth_raw: String,
    pub gender: Gender,
    pub gender_raw: String,
    /// `YYYY-MM-DD`
    pub expiry_date: String,
    /// `YYMMDD`
    pub expiry_date_raw: String,
    pub issuing_country: String,
    pub issuing_country_code: String,
    pub personal_number: Option<String>,
    pub check_digits: CheckDigitResults,
    pub mrz_line1: String,
    pub mrz_line2: String,
    /// 0-100
    pub confidence: u8,
}

/// Why no record came out of a block of OCR text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionFailure {
    #[error("Could not find MRZ (Machine Readable Zone) in the text. Make sure the passport photo includes the bottom two lines of text.")]
    NoMrzFound,
    #[error("Found MRZ lines but could not parse them. The text may be unclear.")]
    UnparseableMrz,
}

/// Result of reading a passport from OCR text. The raw text is always kept
/// so callers can show it for manual correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassportExtractionResult {
    pub raw_text: String,
    pub outcome: Result<PassportData, ExtractionFailure>,
}

impl PassportExtractionResult {
    pub fn parsed(raw_text: impl Into<String>, data: PassportData) -> Self {
        PassportExtractionResult {
            raw_text: raw_text.into(),
            outcome: Ok(data),
        }
    }

    pub fn failed(raw_text: impl Into<String>, failure: ExtractionFailure) -> Self {
        PassportExtractionResult {
            raw_text: raw_text.into(),
            outcome: Err(failure),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn data(&self) -> Option<&PassportData> {
        self.outcome.as_ref().ok()
    }

    pub fn failure(&self) -> Option<ExtractionFailure> {
        self.outcome.as_ref().err().copied()
    }

    pub fn into_data(self) -> Option<PassportData> {
        self.outcome.ok()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtractionReport<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a PassportData>,
    raw_text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

// Flat `{ success, data, rawText, error }` shape the upload handlers return.
impl Serialize for PassportExtractionResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ExtractionReport {
            success: self.is_success(),
            data: self.data(),
            raw_text: &self.raw_text,
            error: self.failure().map(|f| f.to_string()),
        }
        .serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub issue_type: ValidationIssueType,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssueType {
    Checksum,
    MissingField,
    Expiry,
}

impl ValidationIssueType {
    pub fn label(&self) -> &'static str {
        match self {
            ValidationIssueType::Checksum => "CHECKSUM",
            ValidationIssueType::MissingField => "MISSING",
            ValidationIssueType::Expiry => "EXPIRY",
        }
    }
}

#[derive(Debug)]
pub struct MrzValidationResult {
    pub is_valid: bool,
    pub passport_number_check_valid: bool,
    pub date_of_birth_check_valid: bool,
    pub expiry_date_check_valid: bool,
    pub required_fields_present: bool,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug)]
pub struct ExpiryValidationResult {
    pub is_valid: bool,
    pub not_expired: bool,
    pub issues: Vec<ValidationIssue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_mrz() {
        assert_eq!(Gender::from_mrz('M'), Gender::Male);
        assert_eq!(Gender::from_mrz('F'), Gender::Female);
        assert_eq!(Gender::from_mrz('X'), Gender::Other);
        assert_eq!(Gender::from_mrz('<'), Gender::Other);
    }

    #[test]
    fn test_gender_serializes_uppercase() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"FEMALE\"");
    }

    #[test]
    fn test_failed_result_serialization() {
        let result = PassportExtractionResult::failed("garbage", ExtractionFailure::NoMrzFound);
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["rawText"], "garbage");
        assert!(value.get("data").is_none());
        assert!(value["error"].as_str().unwrap().starts_with("Could not find MRZ"));
    }

    #[test]
    fn test_check_digit_counts() {
        let checks = CheckDigitResults {
            passport_number: false,
            date_of_birth: true,
            expiry_date: false,
        };
        assert!(!checks.all_valid());
        assert_eq!(checks.failed_count(), 2);
    }
}
