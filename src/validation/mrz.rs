use crate::models::{MrzValidationResult, PassportData, ValidationIssue, ValidationIssueType};

pub struct MrzValidator;

impl MrzValidator {
    /// List what is wrong with a decoded record: failed check digits and
    /// required fields that came out empty.
    pub fn validate(data: &PassportData) -> MrzValidationResult {
        let mut issues = Vec::new();
        let checks = data.check_digits;

        if !checks.passport_number {
            issues.push(Self::checksum_issue("Passport number"));
        }
        if !checks.date_of_birth {
            issues.push(Self::checksum_issue("Date of birth"));
        }
        if !checks.expiry_date {
            issues.push(Self::checksum_issue("Expiry date"));
        }

        let mut required_fields_present = true;
        let required = [
            ("Name", data.surname.is_empty() && data.given_names.is_empty()),
            ("Passport number", data.passport_number.is_empty()),
            ("Date of birth", data.date_of_birth.is_empty()),
            ("Expiry date", data.expiry_date.is_empty()),
        ];
        for (field, missing) in required {
            if missing {
                required_fields_present = false;
                issues.push(ValidationIssue {
                    issue_type: ValidationIssueType::MissingField,
                    message: format!("{} is missing", field),
                });
            }
        }

        MrzValidationResult {
            is_valid: issues.is_empty(),
            passport_number_check_valid: checks.passport_number,
            date_of_birth_check_valid: checks.date_of_birth,
            expiry_date_check_valid: checks.expiry_date,
            required_fields_present,
            issues,
        }
    }

    fn checksum_issue(field: &str) -> ValidationIssue {
        ValidationIssue {
            issue_type: ValidationIssueType::Checksum,
            message: format!("{} check digit does not match", field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::mrz::parse_mrz_at;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_valid_specimen() {
        let data = parse_mrz_at(
            "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<",
            "L898902C36UTO7408122F1204159ZE184226B<<<<<10",
            today(),
        )
        .unwrap();
        let result = MrzValidator::validate(&data);

        assert!(result.is_valid);
        assert!(result.required_fields_present);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_reports_failed_check_digits() {
        let data = parse_mrz_at(
            "P<SWEBERG<QVIST<<ALEXANDER<<<<<<<<<<<<<<<<<",
            "L1234567<8SWE9001011M3012315<<<<<<<<<<<<<<04",
            today(),
        )
        .unwrap();
        let result = MrzValidator::validate(&data);

        assert!(!result.is_valid);
        assert!(!result.passport_number_check_valid);
        assert!(result.date_of_birth_check_valid);
        assert!(!result.expiry_date_check_valid);
        assert_eq!(result.issues.len(), 2);
        assert!(result
            .issues
            .iter()
            .all(|issue| issue.issue_type == ValidationIssueType::Checksum));
    }

    #[test]
    fn test_reports_missing_fields() {
        let data = parse_mrz_at("P<SWE", "", today()).unwrap();
        let result = MrzValidator::validate(&data);

        assert!(!result.required_fields_present);
        assert_eq!(result.issues.len(), 4);
        assert_eq!(result.issues[0].message, "Name is missing");
    }
}
