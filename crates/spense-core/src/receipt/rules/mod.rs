//! Rule-based field scans for receipt text.

pub mod amounts;
pub mod categories;
pub mod dates;
pub mod patterns;

pub use amounts::{parse_amount, scan_amount};
pub use categories::{CategoryRule, default_lexicon, scan_category};
pub use dates::scan_date;

/// Normalize raw OCR output into scan lines.
///
/// Lines are trimmed, lower-cased, and dropped when empty. All field scans
/// operate on this form.
pub fn normalize_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}
