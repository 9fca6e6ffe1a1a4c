//! Transaction record stored by the model

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Timestamp layout used when rendering a transaction
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single expense entry
///
/// The model never looks inside a transaction; it only stores copies and
/// compares them with `==` when asked to remove one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Amount spent
    pub amount: Decimal,
    /// Spending category (e.g., "food", "travel")
    pub category: String,
    /// When the expense was recorded
    pub timestamp: NaiveDateTime,
}

impl Transaction {
    /// Create a transaction stamped with the current local time
    pub fn new(amount: Decimal, category: impl Into<String>) -> Self {
        Self::with_timestamp(amount, category, Local::now().naive_local())
    }

    /// Create a transaction with an explicit timestamp
    pub fn with_timestamp(
        amount: Decimal,
        category: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            timestamp,
        }
    }

    /// Timestamp formatted for display
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
