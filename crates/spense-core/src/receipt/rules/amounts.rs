//! Amount scanning and parsing.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::AMOUNT_LINE;

/// Scan normalized lines for a labeled amount.
///
/// The first matching line in document order wins, not the largest or the
/// last. Returns the captured numeric text verbatim, or an empty string when
/// no line matches.
pub fn scan_amount(lines: &[String]) -> String {
    lines
        .iter()
        .find_map(|line| AMOUNT_LINE.captures(line).map(|caps| caps[1].to_string()))
        .unwrap_or_default()
}

/// Parse a manually entered or extracted amount.
///
/// Surrounding whitespace is trimmed. Currency symbols are not accepted;
/// the extractor strips `$` inside its own pattern only.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    Decimal::from_str(s.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn captures_labeled_total() {
        let scanned = scan_amount(&lines(&["walmart store #42", "total: $12.34"]));
        assert_eq!(scanned, "12.34");
    }

    #[test]
    fn first_matching_line_wins() {
        let scanned = scan_amount(&lines(&["amount: 3.00", "total: $99.99"]));
        assert_eq!(scanned, "3.00");
    }

    #[test]
    fn accepts_label_without_colon_or_dollar() {
        let scanned = scan_amount(&lines(&["paid 7.5"]));
        assert_eq!(scanned, "7.5");
    }

    #[test]
    fn subtotal_lines_match_too() {
        // "subtotal" contains "total"; the extractor keeps that looseness.
        let scanned = scan_amount(&lines(&["subtotal: $9.99", "total: $11.00"]));
        assert_eq!(scanned, "9.99");
    }

    #[test]
    fn no_label_means_no_amount() {
        let scanned = scan_amount(&lines(&["thank you for shopping", "12.34"]));
        assert_eq!(scanned, "");
    }

    #[test]
    fn parses_trimmed_plain_decimals_only() {
        assert_eq!(parse_amount(" 5.50 "), Decimal::from_str("5.50").ok());
        assert_eq!(parse_amount("5"), Decimal::from_str("5").ok());
        assert_eq!(parse_amount("$5"), None);
        assert_eq!(parse_amount("five"), None);
        assert_eq!(parse_amount(""), None);
    }
}
