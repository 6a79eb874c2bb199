//! ICAO 9303 check digits (modulo 10, weights 7-3-1).

pub const FILLER: char = '<';

const WEIGHTS: [u32; 3] = [7, 3, 1];

/// Numeric value of a single MRZ character.
///
/// Digits are their value, `A`..`Z` are 10..35, filler and anything else 0.
pub fn char_value(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A'..='Z' => c as u32 - 'A' as u32 + 10,
        _ => 0,
    }
}

pub fn compute_check_digit(data: &str) -> u32 {
    data.chars()
        .zip(WEIGHTS.iter().cycle())
        .map(|(c, weight)| char_value(c) * weight)
        .sum::<u32>()
        % 10
}

/// A filler check digit is treated as a wildcard. Any other non-digit fails.
pub fn validate_check_digit(data: &str, check_digit: char) -> bool {
    if check_digit == FILLER {
        return true;
    }
    match check_digit.to_digit(10) {
        Some(expected) => compute_check_digit(data) == expected,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_values() {
        assert_eq!(char_value('0'), 0);
        assert_eq!(char_value('9'), 9);
        assert_eq!(char_value('A'), 10);
        assert_eq!(char_value('Z'), 35);
        assert_eq!(char_value('<'), 0);
        assert_eq!(char_value('é'), 0);
    }

    #[test]
    fn test_icao_specimen_check_digits() {
        // ICAO 9303 part 4 specimen (Utopia, Anna Maria Eriksson)
        assert_eq!(compute_check_digit("L898902C3"), 6);
        assert_eq!(compute_check_digit("740812"), 2);
        assert_eq!(compute_check_digit("120415"), 9);
    }

    #[test]
    fn test_document_number_with_filler() {
        // 21*7 + 1*3 + 2*1 + 3*7 + 4*3 + 5*1 + 6*7 + 7*3 + 0 = 253
        assert_eq!(compute_check_digit("L1234567<"), 3);
    }

    #[test]
    fn test_validate_check_digit() {
        assert!(validate_check_digit("740812", '2'));
        assert!(!validate_check_digit("740812", '3'));
        assert!(validate_check_digit("740812", '<'));
        assert!(!validate_check_digit("740812", 'O'));
    }

    #[test]
    fn test_empty_field() {
        assert_eq!(compute_check_digit(""), 0);
        assert!(validate_check_digit("", '0'));
    }
}
