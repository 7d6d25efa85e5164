//! Receipt text parser producing draft expenses.

use tracing::debug;

use crate::models::expense::DraftExpense;

use super::rules::categories::{CategoryRule, default_lexicon};
use super::rules::{normalize_lines, scan_amount, scan_category, scan_date};

/// Best-effort parser from raw OCR text to a draft expense.
///
/// Parsing never fails: a field with no recognizable value comes back empty
/// (the category falls back to `"unknown"`) and the user completes it by
/// hand.
pub struct ReceiptParser {
    lexicon: Vec<CategoryRule>,
}

impl ReceiptParser {
    /// Create a parser with the built-in category lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: default_lexicon(),
        }
    }

    /// Replace the category lexicon. Rule order stays significant.
    pub fn with_lexicon(mut self, lexicon: Vec<CategoryRule>) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Parse raw OCR text into a draft.
    ///
    /// The icon is always left empty; picking one is a separate interactive
    /// step owned by the submission controller.
    pub fn parse(&self, raw_text: &str) -> DraftExpense {
        let lines = normalize_lines(raw_text);

        let draft = DraftExpense {
            category: scan_category(&lines, &self.lexicon),
            amount: scan_amount(&lines),
            date: scan_date(&lines),
            icon: String::new(),
        };

        debug!(
            category = %draft.category,
            amount = %draft.amount,
            date = %draft.date,
            "parsed receipt text"
        );

        draft
    }
}

impl Default for ReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_typical_receipt() {
        let text = "\
            WALMART SUPERCENTER\n\
            123 Main St\n\
            03/05/2024 14:02\n\
            milk          3.49\n\
            bread         2.29\n\
            TOTAL: $12.34\n\
            thank you for shopping\n";

        let draft = ReceiptParser::new().parse(text);

        assert_eq!(
            draft,
            DraftExpense {
                category: "groceries".to_string(),
                amount: "12.34".to_string(),
                date: "2024-03-05".to_string(),
                icon: String::new(),
            }
        );
    }

    #[test]
    fn two_digit_year_is_canonicalized() {
        let draft = ReceiptParser::new().parse("03/05/24\ntotal: 8.00");
        assert_eq!(draft.date, "2024-03-05");
    }

    #[test]
    fn category_declaration_order_is_authoritative() {
        // The dining keyword comes first in the text; groceries still wins
        // because it is declared earlier in the lexicon.
        let draft = ReceiptParser::new().parse("family restaurant\nwalmart plaza\n");
        assert_eq!(draft.category, "groceries");
    }

    #[test]
    fn unrecognizable_text_yields_empty_draft() {
        let draft = ReceiptParser::new().parse("zzz\nqqq 123\n");
        assert_eq!(
            draft,
            DraftExpense {
                category: "unknown".to_string(),
                amount: String::new(),
                date: String::new(),
                icon: String::new(),
            }
        );
    }

    #[test]
    fn first_amount_line_in_document_order_wins() {
        let draft = ReceiptParser::new().parse("amount: 3.00\ntotal: $99.99\n");
        assert_eq!(draft.amount, "3.00");
    }

    #[test]
    fn custom_lexicon_overrides_builtins() {
        let lexicon = vec![CategoryRule::new("coffee", &["espresso"])];
        let parser = ReceiptParser::new().with_lexicon(lexicon);

        let draft = parser.parse("double espresso\ntotal: 4.20\n");
        assert_eq!(draft.category, "coffee");

        // Built-in keywords are gone with the override.
        let draft = parser.parse("walmart\ntotal: 4.20\n");
        assert_eq!(draft.category, "unknown");
    }
}
