//! Domain models for income and expense transactions.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Identifiable;

/// A single income or expense record.
///
/// `amount` is held in the smallest currency unit. `category_id` is a weak
/// reference into the category collection and is only meaningful on expenses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub amount: i64,
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(
        rename = "categoryId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<String>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Drops the category reference when it points at `category_id`.
    ///
    /// Returns `true` when the reference was cleared.
    pub fn clear_category(&mut self, category_id: &str) -> bool {
        if self.category_id.as_deref() == Some(category_id) {
            self.category_id = None;
            true
        } else {
            false
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Payload for recording a new transaction; the id is assigned on creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTransaction {
    pub amount: i64,
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(
        rename = "categoryId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<String>,
}

impl NewTransaction {
    pub fn income(amount: i64, description: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            description: description.into(),
            date,
            kind: TransactionKind::Income,
            category_id: None,
        }
    }

    pub fn expense(amount: i64, description: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            description: description.into(),
            date,
            kind: TransactionKind::Expense,
            category_id: None,
        }
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub(crate) fn into_transaction(self, id: String) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            description: self.description,
            date: self.date,
            kind: self.kind,
            category_id: self.category_id,
        }
    }
}

/// Whether a transaction adds to or draws from the balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

/// Selects which transactions a history listing shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransactionFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Income => transaction.is_income(),
            TransactionFilter::Expense => transaction.is_expense(),
        }
    }
}
