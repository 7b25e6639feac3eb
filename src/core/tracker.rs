use serde::Serialize;

use crate::config::Config;
use crate::core::errors::Result;
use crate::core::services::{
    BreakdownSlice, CategoryService, FinanceSummary, SummaryService, TransactionService,
};
use crate::storage::Store;

/// Totals and category breakdown shown on the dashboard.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Dashboard {
    pub summary: FinanceSummary,
    pub breakdown: Vec<BreakdownSlice>,
    pub transaction_count: usize,
}

/// Entry point binding both repositories to a single store.
#[derive(Debug, Clone)]
pub struct FinanceTracker {
    store: Store,
}

impl FinanceTracker {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Store::in_memory())
    }

    /// Opens JSON file storage under the configured data directory.
    pub fn open(config: &Config) -> Result<Self> {
        let dir = config.data_dir();
        tracing::info!(path = %dir.display(), "opening finance store");
        Ok(Self::new(Store::json(dir)?))
    }

    pub fn categories(&self) -> CategoryService {
        CategoryService::new(self.store.clone())
    }

    pub fn transactions(&self) -> TransactionService {
        TransactionService::new(self.store.clone())
    }

    pub fn dashboard(&self) -> Result<Dashboard> {
        let transactions = self.transactions().list()?;
        let categories = self.categories().list()?;
        Ok(Dashboard {
            summary: SummaryService::summarize(&transactions),
            breakdown: SummaryService::expense_breakdown(&transactions, &categories),
            transaction_count: transactions.len(),
        })
    }

    /// Wipes both collections. Categories are re-seeded on the next listing.
    pub fn reset(&self) -> Result<()> {
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewTransaction;
    use chrono::NaiveDate;

    #[test]
    fn dashboard_reflects_both_repositories() {
        let tracker = FinanceTracker::in_memory();
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        tracker
            .transactions()
            .create(NewTransaction::income(250_000, "Salary", date))
            .unwrap();
        tracker
            .transactions()
            .create(NewTransaction::expense(50_000, "Rent share", date).with_category("cat4"))
            .unwrap();

        let dashboard = tracker.dashboard().unwrap();
        assert_eq!(dashboard.summary.balance, 200_000);
        assert_eq!(dashboard.transaction_count, 2);
        assert_eq!(dashboard.breakdown[0].name, "Rent");
    }

    #[test]
    fn reset_reseeds_categories() {
        let tracker = FinanceTracker::in_memory();
        tracker.categories().delete("cat1").unwrap();
        assert_eq!(tracker.categories().list().unwrap().len(), 7);
        tracker.reset().unwrap();
        assert_eq!(tracker.categories().list().unwrap().len(), 8);
    }
}
