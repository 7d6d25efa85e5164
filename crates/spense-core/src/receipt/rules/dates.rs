//! Date scanning and normalization.

use super::patterns::DATE_LINE;

/// Scan normalized lines for a date and canonicalize it to YYYY-MM-DD.
///
/// The first match in document order wins. Slash dates are read as
/// MM/DD/YYYY (or MM/DD/YY with the year assumed to be in the 2000s);
/// ISO dates pass through untouched. Returns an empty string when no line
/// matches.
pub fn scan_date(lines: &[String]) -> String {
    let matched = lines
        .iter()
        .find_map(|line| DATE_LINE.find(line).map(|m| m.as_str().to_string()));

    match matched {
        Some(date) if date.contains('/') => normalize_slash_date(&date),
        Some(date) => date,
        None => String::new(),
    }
}

fn normalize_slash_date(date: &str) -> String {
    let mut parts = date.split('/');
    let (Some(month), Some(day), Some(year)) = (parts.next(), parts.next(), parts.next()) else {
        return date.to_string();
    };

    let year = if year.len() == 2 {
        format!("20{year}")
    } else {
        year.to_string()
    };

    format!("{year}-{month:0>2}-{day:0>2}")
}
