//! Expense storage interface.

mod json;

pub use json::JsonStore;

use crate::error::StoreError;
use crate::models::expense::{ExpenseId, ExpenseRecord, NewExpense};

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// The persistence collaborator behind the expense screen.
///
/// In the deployed application this is a remote API; the core relies on
/// exactly these three operations.
pub trait ExpenseStore {
    /// All persisted expenses, in insertion order.
    fn list(&self) -> Result<Vec<ExpenseRecord>>;

    /// Persist a validated expense and return the stored record.
    fn create(&mut self, expense: NewExpense) -> Result<ExpenseRecord>;

    /// Remove an expense by id.
    fn delete(&mut self, id: ExpenseId) -> Result<()>;
}
