pub mod display;
pub mod extractors;
pub mod mrz;
pub mod text;

pub use display::format_for_display;
pub use extractors::{extract_mrz_from_blocks, extract_mrz_from_text};
pub use mrz::{parse_mrz, parse_mrz_at};
pub use text::{parse_passport_from_text, parse_passport_from_text_at};
