/// Reasons a decoded record loses confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Penalty {
    FailedCheckDigit,
    MissingName,
    MissingPassportNumber,
}

impl Penalty {
    pub fn points(&self) -> u32 {
        match self {
            Penalty::FailedCheckDigit => 15,
            Penalty::MissingName => 30,
            Penalty::MissingPassportNumber => 20,
        }
    }
}

pub const MAX_CONFIDENCE: u8 = 100;

/// Start from 100 and subtract every penalty, saturating at 0.
pub fn confidence_score(penalties: &[Penalty]) -> u8 {
    let lost: u32 = penalties.iter().map(Penalty::points).sum();
    (MAX_CONFIDENCE as u32).saturating_sub(lost) as u8
}
