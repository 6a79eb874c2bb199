use chrono::NaiveDate;
use crate::models::{ExpiryValidationResult, PassportData, ValidationIssue, ValidationIssueType};
use crate::utils::parse_iso_date;

pub struct ExpiryValidator;

impl ExpiryValidator {
    /// A passport is still valid on its expiry day.
    pub fn validate(data: &PassportData, today: NaiveDate) -> ExpiryValidationResult {
        let mut issues = Vec::new();
        let mut not_expired = false;

        if let Some(expiry) = parse_iso_date(&data.expiry_date) {
            not_expired = expiry >= today;

            if !not_expired {
                issues.push(ValidationIssue {
                    issue_type: ValidationIssueType::Expiry,
                    message: format!("Passport expired on {}", expiry),
                });
            }
        } else {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Expiry,
                message: format!("Invalid expiry date '{}'", data.expiry_date_raw),
            });
        }

        ExpiryValidationResult {
            is_valid: not_expired,
            not_expired,
            issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::mrz::parse_mrz_at;

    const LINE1: &str = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<";

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_expired_passport() {
        let today = day(2026, 10, 18);
        let data = parse_mrz_at(LINE1, "L898902C36UTO7408122F1204159ZE184226B<<<<<10", today).unwrap();
        let result = ExpiryValidator::validate(&data, today);

        assert!(!result.is_valid);
        assert_eq!(result.issues[0].message, "Passport expired on 2012-04-15");
    }

    #[test]
    fn test_valid_until_expiry_day() {
        let data = parse_mrz_at(LINE1, "L898902C36UTO7408122F3012315ZE184226B<<<<<10", day(2026, 1, 1)).unwrap();

        assert!(ExpiryValidator::validate(&data, day(2030, 12, 31)).not_expired);
        assert!(!ExpiryValidator::validate(&data, day(2031, 1, 1)).not_expired);
    }

    #[test]
    fn test_unreadable_expiry() {
        let today = day(2026, 10, 18);
        let data = parse_mrz_at(LINE1, "L898902C36UTO7408122F", today).unwrap();
        let result = ExpiryValidator::validate(&data, today);

        assert!(!result.is_valid);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].issue_type, ValidationIssueType::Expiry);
    }
}
