//! Error types for the spense-core library.

use thiserror::Error;

use crate::models::expense::ExpenseId;

/// Main error type for the spense library.
#[derive(Error, Debug)]
pub enum SpenseError {
    /// Receipt intake or recognition error.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// Submission error.
    #[error("submit error: {0}")]
    Submit(#[from] SubmitError),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by draft validation.
///
/// Variants are declared in check order; the first failing check is the one
/// reported. A missing icon is deliberately absent here: it suspends the
/// submission instead of failing it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The category field is empty.
    #[error("category is required")]
    MissingCategory,

    /// The amount did not parse as a number greater than zero.
    #[error("amount must be a number greater than 0, got {0:?}")]
    InvalidAmount(String),

    /// The date field is empty.
    #[error("date is required")]
    MissingDate,

    /// The date is present but not in YYYY-MM-DD form.
    #[error("date must be in YYYY-MM-DD form, got {0:?}")]
    InvalidDate(String),
}

/// Errors from the image-to-text collaborator.
#[derive(Error, Debug)]
pub enum RecognizeError {
    /// The OCR backend could not be launched.
    #[error("failed to launch OCR backend: {0}")]
    Spawn(#[source] std::io::Error),

    /// The OCR backend ran but reported a failure.
    #[error("OCR backend failed: {0}")]
    Backend(String),

    /// The OCR backend produced output that was not valid UTF-8.
    #[error("OCR output was not valid UTF-8")]
    Encoding,
}

/// Errors raised while turning a receipt image into a draft expense.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The uploaded bytes are not a PNG or JPEG image.
    #[error("unsupported input: receipts must be PNG or JPEG images")]
    UnsupportedImage,

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(#[from] RecognizeError),
}

/// Errors raised by the submission controller.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// A field failed validation; the draft is preserved for correction.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A submission is already in flight.
    #[error("a submission is already in flight")]
    InFlight,

    /// No held draft is waiting for an icon.
    #[error("no submission is waiting for an icon")]
    NoPendingDraft,

    /// The storage call failed; the draft is preserved for retry.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors from the storage collaborator.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No expense with the given id exists.
    #[error("expense {0} not found")]
    NotFound(ExpenseId),

    /// The underlying storage could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored data could not be decoded.
    #[error("corrupt store data: {0}")]
    Corrupt(String),
}

/// Result type for the spense library.
pub type Result<T> = std::result::Result<T, SpenseError>;
