//! Core library for the spense expense tracker.
//!
//! This crate provides:
//! - Receipt text parsing (category/amount/date guesses from OCR output)
//! - Image intake checks and a pluggable text-recognition seam
//! - The expense submission controller (validation and the icon step)
//! - Storage and notification interfaces plus a JSON file store

pub mod error;
pub mod models;
pub mod notify;
pub mod receipt;
pub mod recognize;
pub mod store;
pub mod submit;

pub use error::{
    RecognizeError, Result, ScanError, SpenseError, StoreError, SubmitError, ValidationError,
};
pub use models::config::SpenseConfig;
pub use models::expense::{DraftExpense, ExpenseId, ExpenseRecord, NewExpense, Validated};
pub use notify::{LogNotifier, Notifier, Severity};
pub use receipt::rules::categories::CategoryRule;
pub use receipt::{ReceiptParser, ReceiptScanner};
pub use recognize::{TextRecognizer, ensure_receipt_image};
pub use store::{ExpenseStore, JsonStore};
pub use submit::{Submission, SubmissionController, SubmitPhase};

#[cfg(feature = "tesseract")]
pub use recognize::TesseractRecognizer;
