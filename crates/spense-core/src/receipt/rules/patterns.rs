//! Regex patterns shared by the receipt field scans.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Labeled amount, e.g. "Total: $50.00", "amount 50", "paid $7.5".
    // The label match is deliberately loose: "subtotal" lines count too.
    pub static ref AMOUNT_LINE: Regex =
        Regex::new(r"(?i)(?:total|amount|paid)[:\s]*\$?(\d+\.?\d{0,2})").unwrap();

    // Slash or ISO date, e.g. "03/05/2024", "3/5/24", "2024-03-05".
    pub static ref DATE_LINE: Regex =
        Regex::new(r"\d{1,2}/\d{1,2}/\d{2,4}|\d{4}-\d{2}-\d{2}").unwrap();
}
