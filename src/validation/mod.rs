pub mod checksum;
pub mod confidence;
pub mod expiry;
pub mod mrz;

pub use checksum::{compute_check_digit, validate_check_digit};
pub use confidence::{confidence_score, Penalty};
pub use expiry::ExpiryValidator;
pub use mrz::MrzValidator;
