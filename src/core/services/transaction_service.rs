//! Business logic helpers for managing transactions.

use crate::core::errors::{FinanceError, Result};
use crate::domain::common::{find_by_id, generate_id};
use crate::domain::transaction::{
    NewTransaction, Transaction, TransactionFilter, TransactionKind,
};
use crate::storage::{Collection, Store};

/// Provides validated create/list/delete helpers for transactions.
#[derive(Debug, Clone)]
pub struct TransactionService {
    store: Store,
}

impl TransactionService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Returns stored transactions, or an empty list for a fresh store.
    pub fn list(&self) -> Result<Vec<Transaction>> {
        let transactions: Vec<Transaction> =
            self.store.read(Collection::Transactions)?.unwrap_or_default();
        tracing::debug!(count = transactions.len(), "loaded transactions");
        Ok(transactions)
    }

    /// Returns matching transactions, newest first.
    pub fn list_filtered(&self, filter: TransactionFilter) -> Result<Vec<Transaction>> {
        let mut transactions: Vec<Transaction> = self
            .list()?
            .into_iter()
            .filter(|txn| filter.matches(txn))
            .collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    pub fn get(&self, id: &str) -> Result<Option<Transaction>> {
        Ok(find_by_id(self.list()?, id))
    }

    /// Validates and records a new transaction, returning the stored record.
    pub fn create(&self, data: NewTransaction) -> Result<Transaction> {
        let data = Self::validate(data)?;
        let mut transactions = self.list()?;
        Self::ensure_total_fits(&transactions, &data)?;
        let transaction = data.into_transaction(generate_id());
        transactions.push(transaction.clone());
        self.store.write(Collection::Transactions, &transactions)?;
        tracing::info!(
            id = %transaction.id,
            kind = %transaction.kind,
            amount = transaction.amount,
            "created transaction"
        );
        Ok(transaction)
    }

    /// Removes the transaction identified by `id`; unknown ids are ignored.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut transactions = self.list()?;
        let before = transactions.len();
        transactions.retain(|txn| txn.id != id);
        if transactions.len() == before {
            tracing::debug!(%id, "delete skipped, transaction not found");
            return Ok(());
        }
        self.store.write(Collection::Transactions, &transactions)?;
        tracing::info!(%id, "deleted transaction");
        Ok(())
    }

    fn validate(mut data: NewTransaction) -> Result<NewTransaction> {
        if data.amount <= 0 {
            return Err(FinanceError::validation(format!(
                "Amount must be positive, got {}",
                data.amount
            )));
        }
        if data.category_id.as_deref().is_some_and(str::is_empty) {
            data.category_id = None;
        }
        if data.kind == TransactionKind::Income && data.category_id.is_some() {
            return Err(FinanceError::validation(
                "Income transactions cannot carry a category",
            ));
        }
        Ok(data)
    }

    /// Rejects an amount that would push the running total of its kind past `i64::MAX`.
    fn ensure_total_fits(transactions: &[Transaction], data: &NewTransaction) -> Result<()> {
        transactions
            .iter()
            .filter(|txn| txn.kind == data.kind)
            .try_fold(data.amount, |total, txn| total.checked_add(txn.amount))
            .map(|_| ())
            .ok_or_else(|| {
                FinanceError::validation(format!(
                    "Amount {} would overflow the {} total",
                    data.amount, data.kind
                ))
            })
    }
}
