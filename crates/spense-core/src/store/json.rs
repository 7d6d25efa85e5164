//! JSON-file-backed expense store.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::StoreError;
use crate::models::expense::{ExpenseId, ExpenseRecord, NewExpense};

use super::{ExpenseStore, Result};

/// File-backed store keeping the whole collection in one JSON document.
///
/// Writes persist eagerly. Ids grow monotonically and are never reused
/// within a file.
pub struct JsonStore {
    path: PathBuf,
    expenses: Vec<ExpenseRecord>,
}

impl JsonStore {
    /// Open a store, starting empty if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let expenses = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupt(e.to_string()))?
        } else {
            Vec::new()
        };

        debug!(path = %path.display(), count = expenses.len(), "opened expense store");

        Ok(Self { path, expenses })
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.expenses)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn next_id(&self) -> ExpenseId {
        self.expenses.iter().map(|e| e.id).max().map_or(1, |id| id + 1)
    }
}

impl ExpenseStore for JsonStore {
    fn list(&self) -> Result<Vec<ExpenseRecord>> {
        Ok(self.expenses.clone())
    }

    fn create(&mut self, expense: NewExpense) -> Result<ExpenseRecord> {
        let record = ExpenseRecord {
            id: self.next_id(),
            category: expense.category,
            amount: expense.amount,
            date: expense.date,
            icon: expense.icon,
        };
        self.expenses.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    fn delete(&mut self, id: ExpenseId) -> Result<()> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.expenses.remove(index);
        self.persist()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn expense(category: &str, amount: &str) -> NewExpense {
        NewExpense {
            category: category.to_string(),
            amount: Decimal::from_str(amount).unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            icon: "🧾".to_string(),
        }
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("expenses.json")).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn create_assigns_monotonic_ids_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.json");

        let mut store = JsonStore::open(&path).unwrap();
        let first = store.create(expense("groceries", "12.34")).unwrap();
        let second = store.create(expense("fuel", "40.00")).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let reopened = JsonStore::open(&path).unwrap();
        let listed = reopened.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].category, "groceries");
        assert_eq!(listed[1].amount, Decimal::from_str("40.00").unwrap());
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.json");

        let mut store = JsonStore::open(&path).unwrap();
        store.create(expense("groceries", "1")).unwrap();
        let second = store.create(expense("dining", "2")).unwrap();
        store.delete(1).unwrap();

        let third = store.create(expense("fuel", "3")).unwrap();
        assert_eq!(third.id, second.id + 1);
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::open(dir.path().join("expenses.json")).unwrap();

        let err = store.delete(42).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(42)));
    }

    #[test]
    fn corrupt_file_is_reported_not_clobbered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.json");
        fs::write(&path, "{{ not json").unwrap();

        let err = JsonStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{{ not json");
    }
}
