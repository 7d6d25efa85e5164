//! Expense submission controller.
//!
//! Sequences "validate → collect icon → create → refresh" as an explicit
//! state machine. The controller owns the draft between submission attempts
//! and the cached expense collection between refreshes; storage and
//! notification collaborators are injected.

use tracing::{debug, info};

use crate::error::{StoreError, SubmitError};
use crate::models::expense::{DraftExpense, ExpenseId, ExpenseRecord, Validated};
use crate::notify::{Notifier, Severity};
use crate::store::ExpenseStore;

/// Where the controller currently is in the submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    /// No input surface open, nothing held.
    Idle,
    /// The input surface is open; a draft may be held for correction.
    Drafting,
    /// All fields but the icon were valid; waiting for the user's pick.
    PendingIcon,
    /// A create call is in flight.
    Submitting,
}

enum State {
    Idle,
    Drafting { draft: DraftExpense },
    PendingIcon { draft: DraftExpense },
    Submitting,
}

/// Successful outcome of a submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The record was stored and the collection refreshed.
    Completed(ExpenseRecord),

    /// Submission is suspended until an icon is selected; the draft stays
    /// held by the controller.
    AwaitingIcon,
}

/// Orchestrates expense submission against injected collaborators.
pub struct SubmissionController<S, N> {
    store: S,
    notifier: N,
    state: State,
    expenses: Vec<ExpenseRecord>,
}

impl<S: ExpenseStore, N: Notifier> SubmissionController<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            store,
            notifier,
            state: State::Idle,
            expenses: Vec::new(),
        }
    }

    /// Open the input surface with an empty draft.
    pub fn open_blank(&mut self) {
        self.state = State::Drafting {
            draft: DraftExpense::default(),
        };
    }

    /// Open the input surface prefilled, e.g. from a scanned receipt.
    pub fn open_with(&mut self, draft: DraftExpense) {
        self.state = State::Drafting { draft };
    }

    /// Validate and submit a draft.
    ///
    /// Checks run in fixed order: category, amount, date, icon. The first
    /// failure is notified and aborts with the draft preserved for
    /// correction; no storage call is made. A draft missing only its icon
    /// suspends as [`Submission::AwaitingIcon`] instead of failing. On full
    /// validity the store's create operation is called exactly once; success
    /// clears all held state and refreshes the collection, failure keeps the
    /// draft so the user can retry.
    pub fn submit(&mut self, draft: DraftExpense) -> Result<Submission, SubmitError> {
        if matches!(self.state, State::Submitting) {
            return Err(SubmitError::InFlight);
        }

        let validated = match draft.validate() {
            Ok(validated) => validated,
            Err(err) => {
                self.notifier.notify(Severity::Error, &err.to_string());
                self.state = State::Drafting { draft };
                return Err(err.into());
            }
        };

        match validated {
            Validated::AwaitingIcon => {
                debug!("draft valid except icon; holding for selection");
                self.state = State::PendingIcon { draft };
                Ok(Submission::AwaitingIcon)
            }
            Validated::Complete(expense) => {
                self.state = State::Submitting;
                match self.store.create(expense) {
                    Ok(record) => {
                        info!(id = record.id, "expense stored");
                        self.state = State::Idle;
                        self.notifier
                            .notify(Severity::Success, "Expense added successfully");
                        self.refresh();
                        Ok(Submission::Completed(record))
                    }
                    Err(err) => {
                        self.notifier.notify(Severity::Error, "Failed to add expense.");
                        self.state = State::Drafting { draft };
                        Err(err.into())
                    }
                }
            }
        }
    }

    /// Merge a selected icon into the held draft and resubmit.
    ///
    /// Only meaningful while an icon is pending. Validation runs again in
    /// full; [`SubmissionController::submit`] is the single entry point.
    pub fn icon_selected(&mut self, icon: &str) -> Result<Submission, SubmitError> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::PendingIcon { draft } => self.submit(draft.with_icon(icon)),
            other => {
                self.state = other;
                Err(SubmitError::NoPendingDraft)
            }
        }
    }

    /// Close the input surface, discarding any held draft.
    ///
    /// No storage call is made; an in-flight create is not aborted.
    pub fn cancel(&mut self) {
        if !matches!(self.state, State::Idle) {
            debug!("submission cancelled; held draft discarded");
        }
        self.state = State::Idle;
    }

    /// Re-fetch the collection from storage.
    ///
    /// On failure the previously fetched list stays in place.
    pub fn refresh(&mut self) {
        match self.store.list() {
            Ok(expenses) => self.expenses = expenses,
            Err(err) => {
                debug!(error = %err, "list refresh failed; keeping stale collection");
                self.notifier.notify(Severity::Error, "Failed to fetch expenses.");
            }
        }
    }

    /// Delete a stored expense and refresh the collection.
    pub fn remove(&mut self, id: ExpenseId) -> Result<(), StoreError> {
        match self.store.delete(id) {
            Ok(()) => {
                self.notifier
                    .notify(Severity::Success, "Expense deleted successfully");
                self.refresh();
                Ok(())
            }
            Err(err) => {
                self.notifier.notify(Severity::Error, "Failed to delete expense.");
                Err(err)
            }
        }
    }

    /// The collection as of the last successful refresh.
    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SubmitPhase {
        match self.state {
            State::Idle => SubmitPhase::Idle,
            State::Drafting { .. } => SubmitPhase::Drafting,
            State::PendingIcon { .. } => SubmitPhase::PendingIcon,
            State::Submitting => SubmitPhase::Submitting,
        }
    }

    /// The held draft, if the controller is in a draft-owning phase.
    pub fn draft(&self) -> Option<&DraftExpense> {
        match &self.state {
            State::Drafting { draft } | State::PendingIcon { draft } => Some(draft),
            State::Idle | State::Submitting => None,
        }
    }
}
