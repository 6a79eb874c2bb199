pub mod config;
pub mod models;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod passport_reader;

pub use passport_reader::PassportReader;
pub use processing::{extract_mrz_from_text, parse_mrz, parse_passport_from_text};
