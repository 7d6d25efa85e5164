//! Receipt intake: image bytes to a draft expense.

use crate::error::ScanError;
use crate::models::expense::DraftExpense;
use crate::recognize::{TextRecognizer, ensure_receipt_image};

use super::ReceiptParser;

/// Pipeline from uploaded image bytes to a prefilled draft.
pub struct ReceiptScanner<R> {
    recognizer: R,
    parser: ReceiptParser,
}

impl<R: TextRecognizer> ReceiptScanner<R> {
    pub fn new(recognizer: R) -> Self {
        Self {
            recognizer,
            parser: ReceiptParser::new(),
        }
    }

    /// Use a custom parser, e.g. one with a configured lexicon.
    pub fn with_parser(mut self, parser: ReceiptParser) -> Self {
        self.parser = parser;
        self
    }

    /// Check the input type, recognize text, and parse a draft.
    ///
    /// Non-image input is rejected before the recognizer is consulted.
    pub async fn scan(&self, image: &[u8]) -> Result<DraftExpense, ScanError> {
        ensure_receipt_image(image)?;
        let text = self.recognizer.recognize(image).await?;
        Ok(self.parser.parse(&text))
    }
}
