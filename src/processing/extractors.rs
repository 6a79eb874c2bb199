// Locating the two MRZ lines inside free-form OCR output
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::models::MrzLines;
use crate::processing::mrz::TD3_LINE_LENGTH;

/// OCR lines shorter than this are never considered MRZ candidates.
pub const MIN_MRZ_LINE_LENGTH: usize = 40;

lazy_static! {
    static ref PASSPORT_LINE_START: Regex = Regex::new(r"^P[<A-Z]").unwrap();
    static ref MRZ_LINE_START: Regex = Regex::new(r"^[A-Z0-9<]").unwrap();
    static ref MRZ_CHARSET: Regex = Regex::new(r"^[A-Z0-9<]+$").unwrap();
    // Used when OCR merged the zone into one block of text
    static ref BLOCK_LINE1: Regex = Regex::new(r"P[<A-Z][A-Z<]{41,43}").unwrap();
    static ref BLOCK_LINE2: Regex = Regex::new(r"[A-Z0-9<]{40,44}").unwrap();
}

/// Find the two MRZ lines of a passport in a multi-line OCR text.
///
/// Tries a line starting with `P<`/`PX` followed by another long line first,
/// then any two consecutive long lines made only of MRZ characters that both
/// contain filler. Lines are returned with whitespace removed and cut to 44
/// characters.
pub fn extract_mrz_from_text(text: &str) -> Option<MrzLines> {
    let lines: Vec<String> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_whitespace)
        .collect();

    for pair in lines.windows(2) {
        let (line, next) = (&pair[0], &pair[1]);
        if is_long_enough(line)
            && PASSPORT_LINE_START.is_match(line)
            && is_long_enough(next)
            && MRZ_LINE_START.is_match(next)
        {
            debug!("MRZ located by passport marker");
            return Some(to_mrz_lines(line, next));
        }
    }

    for pair in lines.windows(2) {
        let (line, next) = (&pair[0], &pair[1]);
        if is_mrz_shaped(line) && is_mrz_shaped(next) {
            debug!("MRZ located by character shape");
            return Some(to_mrz_lines(line, next));
        }
    }

    None
}

/// Like [`extract_mrz_from_text`], but when no line pair qualifies it also
/// searches the text as one block. Some OCR engines return the zone merged
/// into a single line or split across several.
pub fn extract_mrz_from_blocks(text: &str) -> Option<MrzLines> {
    if let Some(lines) = extract_mrz_from_text(text) {
        return Some(lines);
    }

    let all_text = text.replace('\n', " ");
    let line1_match = BLOCK_LINE1.find(&all_text)?;
    let line1 = truncate(line1_match.as_str());

    // The patterns only match ASCII, so byte offsets are character offsets here.
    let rest = &all_text[line1_match.start() + line1.len()..];
    let line2_match = BLOCK_LINE2.find(rest)?;

    debug!("MRZ located in merged text block");
    Some(MrzLines::new(line1, truncate(line2_match.as_str())))
}

fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

fn is_long_enough(line: &str) -> bool {
    line.chars().count() >= MIN_MRZ_LINE_LENGTH
}

fn is_mrz_shaped(line: &str) -> bool {
    is_long_enough(line) && line.contains('<') && MRZ_CHARSET.is_match(line)
}

fn truncate(line: &str) -> String {
    line.chars().take(TD3_LINE_LENGTH).collect()
}

fn to_mrz_lines(line1: &str, line2: &str) -> MrzLines {
    MrzLines::new(truncate(line1), truncate(line2))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE1: &str = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<";
    const LINE2: &str = "L898902C36UTO7408122F1204159ZE184226B<<<<<10";

    #[test]
    fn test_finds_pair_among_noise() {
        let text = format!(
            "PASSPORT\nPASS\nKingdom of Utopia\nSurname / Nom\nERIKSSON\n{}\n{}\nSignature\n",
            LINE1, LINE2
        );
        let lines = extract_mrz_from_text(&text).unwrap();
        assert_eq!(lines, MrzLines::new(LINE1, LINE2));
    }

    #[test]
    fn test_strips_whitespace_and_crlf() {
        let text = format!(
            "header\r\n  P<UTOERIKSSON<<ANNA<MARIA <<<<<<<<<<<<<<<<<<< \r\n{} \r\n",
            LINE2
        );
        let lines = extract_mrz_from_text(&text).unwrap();
        assert_eq!(lines.line1, LINE1);
        assert_eq!(lines.line2, LINE2);
    }

    #[test]
    fn test_truncates_to_44() {
        let text = format!("{}<<<<\n{}999\n", LINE1, LINE2);
        let lines = extract_mrz_from_text(&text).unwrap();
        assert_eq!(lines.line1.len(), 44);
        assert_eq!(lines.line2, LINE2);
    }

    #[test]
    fn test_shape_fallback_without_marker() {
        let line1 = "I<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<";
        let text = format!("ID CARD\n{}\n{}\n", line1, LINE2);
        let lines = extract_mrz_from_text(&text).unwrap();
        assert_eq!(lines.line1, line1);
        assert_eq!(lines.line2, LINE2);
    }

    #[test]
    fn test_shape_fallback_needs_filler_and_charset() {
        let no_filler = "ABCDEFGHIJKLMNOPQRSTUVWXYZABCDEFGHIJKLMNOP";
        let lowercase = "i<utoeriksson<<anna<maria<<<<<<<<<<<<<<<<<<<";
        assert!(extract_mrz_from_text(&format!("{}\n{}", no_filler, LINE2)).is_none());
        assert!(extract_mrz_from_text(&format!("{}\n{}", lowercase, LINE2)).is_none());
    }

    #[test]
    fn test_no_long_lines() {
        assert!(extract_mrz_from_text("").is_none());
        assert!(extract_mrz_from_text("PASSPORT\nP<UTO\nL898902C3").is_none());
        assert!(extract_mrz_from_text(LINE1).is_none());
    }

    #[test]
    fn test_blocks_prefers_line_search() {
        let text = format!("{}\n{}", LINE1, LINE2);
        assert_eq!(extract_mrz_from_blocks(&text), extract_mrz_from_text(&text));
    }

    #[test]
    fn test_blocks_merged_line() {
        let text = format!("Passport scan\n{} {}\nend", LINE1, LINE2);
        assert!(extract_mrz_from_text(&text).is_none());

        let lines = extract_mrz_from_blocks(&text).unwrap();
        assert_eq!(lines.line1, LINE1);
        assert_eq!(lines.line2, LINE2);
    }

    #[test]
    fn test_blocks_without_second_line() {
        assert!(extract_mrz_from_blocks(&format!("{} short", LINE1)).is_none());
        assert!(extract_mrz_from_blocks("nothing here").is_none());
    }
}
