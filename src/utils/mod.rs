pub mod dates;
pub mod error;

pub use dates::{ddmmyyyy_to_iso, iso_to_ddmmyyyy, mrz_date_to_iso, parse_iso_date, DateKind};
pub use error::PassportError;
