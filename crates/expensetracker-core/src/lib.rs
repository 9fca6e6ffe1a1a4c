//! Observable expense-tracking model
//!
//! [`ExpenseTrackerModel`] owns three things that must stay consistent with
//! each other:
//!
//! - the transactions, in insertion order;
//! - the matched filter indices, positions into those transactions produced
//!   by an external filter;
//! - the registered listeners, told about every state change.
//!
//! # Invariants
//!
//! 1. Every matched filter index is `< transaction_count()`. Any change to
//!    the transaction list clears the indices.
//! 2. Nothing handed in or out aliases internal state; reads and writes copy.
//! 3. `add_transaction` broadcasts exactly once. `remove_transaction` and
//!    `set_matched_filter_indices` never broadcast.
//! 4. Listeners run synchronously in registration order. The first failing
//!    listener stops the broadcast and its error is returned.

pub mod error;
pub mod listener;
pub mod models;

use log::{debug, warn};
use rust_decimal::Decimal;

pub use error::{ErrorCode, ErrorDetails, ErrorSeverity, ModelError, ModelResult};
pub use listener::{ExpenseTrackerModelListener, ListenerRef};
pub use models::Transaction;

use listener::ListenerRegistry;

const LOG_TARGET: &str = "expensetracker::model";

/// The observable state container
#[derive(Default)]
pub struct ExpenseTrackerModel {
    transactions: Vec<Transaction>,
    matched_filter_indices: Vec<usize>,
    listeners: ListenerRegistry,
}

impl ExpenseTrackerModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Transactions ====================

    /// Append a transaction and notify every listener.
    ///
    /// The previous filter result is discarded before listeners run. If a
    /// listener fails, the transaction stays added and the error is returned.
    pub fn add_transaction(&mut self, transaction: Transaction) -> ModelResult<()> {
        self.transactions.push(transaction);
        // The previous filter is no longer valid.
        self.matched_filter_indices.clear();
        debug!(
            target: LOG_TARGET,
            "Added transaction, {} stored",
            self.transactions.len()
        );
        self.state_changed()
    }

    /// Remove the first transaction equal to `transaction`.
    ///
    /// Does nothing when no such transaction is stored. Listeners are not
    /// notified; call [`notify_observers`](Self::notify_observers) if they
    /// should learn about the removal.
    pub fn remove_transaction(&mut self, transaction: &Transaction) {
        let Some(position) = self.transactions.iter().position(|t| t == transaction) else {
            debug!(target: LOG_TARGET, "Remove ignored, transaction not found");
            return;
        };
        self.transactions.remove(position);
        self.matched_filter_indices.clear();
        debug!(
            target: LOG_TARGET,
            "Removed transaction at {}, {} stored",
            position,
            self.transactions.len()
        );
    }

    /// Snapshot of all transactions in insertion order
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Number of stored transactions
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Sum of every stored amount
    pub fn total_amount(&self) -> Decimal {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    // ==================== Filter indices ====================

    /// Replace the matched filter indices with a copy of `indices`.
    ///
    /// Every index must be below the current transaction count. The whole
    /// slice is checked first, so a rejected call leaves the stored indices
    /// untouched. Listeners are not notified.
    pub fn set_matched_filter_indices(&mut self, indices: &[usize]) -> ModelResult<()> {
        let count = self.transactions.len();
        if let Some(bad) = indices.iter().find(|&&index| index >= count) {
            return Err(ModelError::invalid_argument(format!(
                "matched filter index {} is out of range; each index must be between 0 (inclusive) and the number of transactions {} (exclusive)",
                bad, count
            )));
        }

        self.matched_filter_indices.clear();
        self.matched_filter_indices.extend_from_slice(indices);
        debug!(
            target: LOG_TARGET,
            "Stored {} matched filter indices",
            self.matched_filter_indices.len()
        );
        Ok(())
    }

    /// Copy of the matched filter indices, in stored order
    pub fn matched_filter_indices(&self) -> Vec<usize> {
        self.matched_filter_indices.clone()
    }

    /// Copies of the transactions the current filter matched, in index order
    pub fn matched_transactions(&self) -> Vec<Transaction> {
        self.matched_filter_indices
            .iter()
            .filter_map(|&index| self.transactions.get(index).cloned())
            .collect()
    }

    // ==================== Listeners ====================

    /// Register a listener for state change events.
    ///
    /// Returns `false` if this exact handle is already registered.
    pub fn register(&mut self, listener: ListenerRef) -> bool {
        let added = self.listeners.register(listener);
        if added {
            debug!(
                target: LOG_TARGET,
                "Registered listener, {} total",
                self.listeners.len()
            );
        }
        added
    }

    /// Number of registered listeners
    pub fn number_of_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Whether this exact handle is registered
    pub fn contains_listener(&self, listener: &ListenerRef) -> bool {
        self.listeners.contains(listener)
    }

    /// Tell every listener the state changed
    pub fn notify_observers(&self) -> ModelResult<()> {
        self.state_changed()
    }

    fn state_changed(&self) -> ModelResult<()> {
        debug!(
            target: LOG_TARGET,
            "Notifying {} listeners",
            self.listeners.len()
        );
        for (position, listener) in self.listeners.iter().enumerate() {
            if let Err(source) = listener.update(self) {
                warn!(
                    target: LOG_TARGET,
                    "Listener {} failed, broadcast stopped: {:#}",
                    position,
                    source
                );
                return Err(ModelError::Listener { source });
            }
        }
        Ok(())
    }
}

// ==================== Tests ====================
