//! Expense records in their draft, validated, and stored forms.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::receipt::rules::amounts::parse_amount;

/// Identifier assigned by the expense store.
pub type ExpenseId = u64;

/// An expense candidate with possibly-missing fields.
///
/// Drafts come from the receipt extractor or from manual form entry. Fields
/// are kept as entered; an empty string marks a miss. [`DraftExpense::validate`]
/// is the single gate between a draft and storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftExpense {
    /// Free-text category label.
    pub category: String,

    /// Decimal amount as entered, without a currency symbol.
    pub amount: String,

    /// Calendar date, canonical form YYYY-MM-DD.
    pub date: String,

    /// Emoji or identifier chosen by the user; empty while unpicked.
    pub icon: String,
}

/// A fully validated expense, ready for the store's create operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub icon: String,
}

/// A persisted expense as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub icon: String,
}

/// Outcome of validating a draft.
#[derive(Debug, Clone, PartialEq)]
pub enum Validated {
    /// Every field present and well-formed.
    Complete(NewExpense),

    /// All fields but the icon check out; submission should suspend until
    /// the user picks one.
    AwaitingIcon,
}

impl DraftExpense {
    /// Validate in fixed order: category, amount, date, icon.
    ///
    /// The first failing check wins and nothing later is inspected. A draft
    /// missing only its icon is not an error; it reports
    /// [`Validated::AwaitingIcon`] so the caller can collect one and
    /// resubmit.
    pub fn validate(&self) -> Result<Validated, ValidationError> {
        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }

        let amount = parse_amount(&self.amount)
            .filter(|amount| *amount > Decimal::ZERO)
            .ok_or_else(|| ValidationError::InvalidAmount(self.amount.clone()))?;

        let date = self.date.trim();
        if date.is_empty() {
            return Err(ValidationError::MissingDate);
        }
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(self.date.clone()))?;

        if self.icon.is_empty() {
            return Ok(Validated::AwaitingIcon);
        }

        Ok(Validated::Complete(NewExpense {
            category: category.to_string(),
            amount,
            date,
            icon: self.icon.clone(),
        }))
    }

    /// Replace the icon, keeping all other fields.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn draft(category: &str, amount: &str, date: &str, icon: &str) -> DraftExpense {
        DraftExpense {
            category: category.to_string(),
            amount: amount.to_string(),
            date: date.to_string(),
            icon: icon.to_string(),
        }
    }

    #[test]
    fn complete_draft_produces_typed_record() {
        let validated = draft("Food", "12.34", "2024-01-15", "🍔").validate().unwrap();

        assert_eq!(
            validated,
            Validated::Complete(NewExpense {
                category: "Food".to_string(),
                amount: Decimal::from_str("12.34").unwrap(),
                date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                icon: "🍔".to_string(),
            })
        );
    }

    #[test]
    fn missing_icon_is_not_an_error() {
        let validated = draft("Food", "5", "2024-01-01", "").validate().unwrap();
        assert_eq!(validated, Validated::AwaitingIcon);
    }

    #[test]
    fn empty_category_fails_first() {
        // Everything else is bad too; category is still the reported error.
        let err = draft("", "nope", "", "").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingCategory);
    }

    #[test]
    fn amount_must_be_a_positive_number() {
        for bad in ["", "abc", "0", "-5", "$5"] {
            let err = draft("Food", bad, "2024-01-01", "🍔").validate().unwrap_err();
            assert_eq!(err, ValidationError::InvalidAmount(bad.to_string()));
        }
    }

    #[test]
    fn amount_tolerates_surrounding_whitespace() {
        let validated = draft("Food", " 5.50 ", "2024-01-01", "🍔").validate().unwrap();
        match validated {
            Validated::Complete(expense) => {
                assert_eq!(expense.amount, Decimal::from_str("5.50").unwrap());
            }
            other => panic!("expected complete, got {other:?}"),
        }
    }

    #[test]
    fn malformed_date_is_distinct_from_missing() {
        let err = draft("Food", "5", "", "🍔").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingDate);

        let err = draft("Food", "5", "01/15/2024", "🍔").validate().unwrap_err();
        assert_eq!(err, ValidationError::InvalidDate("01/15/2024".to_string()));
    }

    #[test]
    fn with_icon_preserves_other_fields() {
        let updated = draft("Food", "5", "2024-01-01", "").with_icon("🍕");
        assert_eq!(updated, draft("Food", "5", "2024-01-01", "🍕"));
    }
}
