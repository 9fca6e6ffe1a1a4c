//! Console view: redraws the transaction table whenever the model changes

use std::io::Write;

use expensetracker_config::CurrencyConfig;
use expensetracker_core::{ExpenseTrackerModel, ExpenseTrackerModelListener};
use expensetracker_utils::format_amount;

pub struct ConsoleListener {
    currency: CurrencyConfig,
}

impl ConsoleListener {
    pub fn new(currency: CurrencyConfig) -> Self {
        Self { currency }
    }

    fn amount(&self, amount: rust_decimal::Decimal) -> String {
        format_amount(
            amount,
            &self.currency.symbol,
            self.currency.decimal_places,
            &self.currency.thousands_separator,
        )
    }

    /// Render the table into `out`; matched rows are flagged with `*`
    pub fn render(&self, model: &ExpenseTrackerModel, out: &mut impl Write) -> anyhow::Result<()> {
        let matched = model.matched_filter_indices();

        writeln!(out, "{:>3}  {:<19}  {:<14}  {:>14}", "#", "Date", "Category", "Amount")?;
        for (index, transaction) in model.transactions().iter().enumerate() {
            let mark = if matched.contains(&index) { '*' } else { ' ' };
            writeln!(
                out,
                "{:>3}{} {:<19}  {:<14}  {:>14}",
                index + 1,
                mark,
                transaction.formatted_timestamp(),
                transaction.category,
                self.amount(transaction.amount)
            )?;
        }
        writeln!(out, "{:>57}", format!("Total: {}", self.amount(model.total_amount())))?;
        if !matched.is_empty() {
            writeln!(out, "{} of {} transactions match the filter", matched.len(), model.transaction_count())?;
        }
        writeln!(out)?;
        Ok(())
    }
}

impl ExpenseTrackerModelListener for ConsoleListener {
    fn update(&self, model: &ExpenseTrackerModel) -> anyhow::Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.render(model, &mut out)
    }
}
