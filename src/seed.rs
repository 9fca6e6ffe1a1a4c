//! Seed file replay
//!
//! A seed file lists transactions to add, transactions to remove afterwards,
//! and optionally the filter result to apply at the end:
//!
//! ```yaml
//! transactions:
//!   - { amount: 12.50, category: food, timestamp: "2024-05-01T09:00:00" }
//! remove:
//!   - { amount: 12.50, category: food, timestamp: "2024-05-01T09:00:00" }
//! matched: [0]
//! ```

use std::path::Path;

use anyhow::Context;
use expensetracker_core::{ExpenseTrackerModel, ModelError, ModelResult, Transaction};
use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    /// `~` entries are kept so they can be rejected like any other bad input
    #[serde(default)]
    pub transactions: Vec<Option<Transaction>>,
    #[serde(default)]
    pub remove: Vec<Transaction>,
    #[serde(default)]
    pub matched: Option<Vec<usize>>,
}

/// Outcome of a replay
#[derive(Debug, Default, PartialEq)]
pub struct ReplaySummary {
    pub added: usize,
    pub rejected: usize,
}

impl SeedFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("parsing seed file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Drive the model through the seed.
    ///
    /// Invalid input is reported and skipped, as a controller would show a
    /// validation message. Listener failures abort the replay.
    pub fn replay(&self, model: &mut ExpenseTrackerModel) -> ModelResult<ReplaySummary> {
        let mut summary = ReplaySummary::default();

        for (position, entry) in self.transactions.iter().enumerate() {
            let result = match entry {
                Some(transaction) => model.add_transaction(transaction.clone()),
                None => Err(ModelError::invalid_argument(format!(
                    "seed entry {} is empty; a transaction must be present",
                    position
                ))),
            };
            match result {
                Ok(()) => summary.added += 1,
                Err(err @ ModelError::InvalidArgument { .. }) => {
                    warn!("{}", err.to_details());
                    summary.rejected += 1;
                }
                Err(err) => return Err(err),
            }
        }

        if !self.remove.is_empty() {
            for transaction in &self.remove {
                model.remove_transaction(transaction);
            }
            // Removal does not broadcast on its own.
            model.notify_observers()?;
        }

        if let Some(matched) = &self.matched {
            match model.set_matched_filter_indices(matched) {
                Ok(()) => model.notify_observers()?,
                Err(err) => {
                    warn!("{}", err.to_details());
                    summary.rejected += 1;
                }
            }
        }

        info!(
            "Replayed seed: {} added, {} rejected, {} stored",
            summary.added,
            summary.rejected,
            model.transaction_count()
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const SEED: &str = r#"
transactions:
  - { amount: 10.00, category: food, timestamp: "2024-05-01T09:00:00" }
  - ~
  - { amount: 25.00, category: travel, timestamp: "2024-05-02T09:00:00" }
  - { amount: 5.00, category: bills, timestamp: "2024-05-03T09:00:00" }
remove:
  - { amount: 25.00, category: travel, timestamp: "2024-05-02T09:00:00" }
matched: [1]
"#;

    #[test]
    fn test_replay_adds_removes_and_filters() {
        let seed = SeedFile::from_yaml(SEED).unwrap();
        let mut model = ExpenseTrackerModel::new();
        let updates = Rc::new(Cell::new(0));
        let counter = updates.clone();
        model.register(Rc::new(move |_: &ExpenseTrackerModel| -> anyhow::Result<()> {
            counter.set(counter.get() + 1);
            Ok(())
        }));

        let summary = seed.replay(&mut model).unwrap();

        assert_eq!(summary, ReplaySummary { added: 3, rejected: 1 });
        assert_eq!(model.transaction_count(), 2);
        assert_eq!(model.matched_filter_indices(), vec![1]);
        assert_eq!(model.matched_transactions()[0].category, "bills");
        // three adds, one after removals, one after filtering
        assert_eq!(updates.get(), 5);
    }

    #[test]
    fn test_replay_rejects_out_of_range_filter() {
        let seed = SeedFile::from_yaml(
            r#"
transactions:
  - { amount: 1, category: food, timestamp: "2024-05-01T09:00:00" }
matched: [0, 4]
"#,
        )
        .unwrap();
        let mut model = ExpenseTrackerModel::new();

        let summary = seed.replay(&mut model).unwrap();

        assert_eq!(summary.rejected, 1);
        assert!(model.matched_filter_indices().is_empty());
    }

    #[test]
    fn test_replay_stops_on_listener_failure() {
        let seed = SeedFile::from_yaml(SEED).unwrap();
        let mut model = ExpenseTrackerModel::new();
        model.register(Rc::new(|_: &ExpenseTrackerModel| -> anyhow::Result<()> {
            anyhow::bail!("display closed")
        }));

        let err = seed.replay(&mut model).unwrap_err();

        assert!(matches!(err, ModelError::Listener { .. }));
        assert_eq!(model.transaction_count(), 1);
    }

    #[test]
    fn test_empty_seed() {
        let seed = SeedFile::from_yaml("").unwrap();
        assert!(seed.transactions.is_empty());
        assert!(seed.matched.is_none());
    }
}
