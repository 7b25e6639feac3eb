use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::transaction::{Transaction, TransactionKind};

pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";
pub const UNCATEGORIZED_COLOR: &str = "#666";

/// Income, expense and the balance derived from them.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct FinanceSummary {
    pub income: i64,
    pub expense: i64,
    pub balance: i64,
}

/// One category's share of total expenses, resolved for display.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BreakdownSlice {
    pub category_id: String,
    pub name: String,
    pub color: String,
    pub amount: i64,
}

/// Pure aggregation over in-memory transactions. Never touches a store.
pub struct SummaryService;

impl SummaryService {
    pub fn total_income(transactions: &[Transaction]) -> i64 {
        Self::total_for(transactions, TransactionKind::Income)
    }

    pub fn total_expense(transactions: &[Transaction]) -> i64 {
        Self::total_for(transactions, TransactionKind::Expense)
    }

    pub fn balance(transactions: &[Transaction]) -> i64 {
        Self::total_income(transactions).saturating_sub(Self::total_expense(transactions))
    }

    /// Sums expenses per category. Expenses without a category are left out.
    ///
    /// Every sum in this module saturates at the `i64` bounds.
    pub fn expenses_by_category(transactions: &[Transaction]) -> BTreeMap<String, i64> {
        let mut totals = BTreeMap::new();
        for txn in transactions.iter().filter(|txn| txn.is_expense()) {
            if let Some(category_id) = txn.category_id.as_ref() {
                let total = totals.entry(category_id.clone()).or_insert(0i64);
                *total = total.saturating_add(txn.amount);
            }
        }
        totals
    }

    pub fn uncategorized_expense(transactions: &[Transaction]) -> i64 {
        let categorized = Self::expenses_by_category(transactions)
            .values()
            .fold(0i64, |sum, amount| sum.saturating_add(*amount));
        Self::total_expense(transactions).saturating_sub(categorized)
    }

    pub fn summarize(transactions: &[Transaction]) -> FinanceSummary {
        let income = Self::total_income(transactions);
        let expense = Self::total_expense(transactions);
        FinanceSummary {
            income,
            expense,
            balance: income.saturating_sub(expense),
        }
    }

    /// Resolves the per-category totals against `categories`, largest first.
    pub fn expense_breakdown(
        transactions: &[Transaction],
        categories: &[Category],
    ) -> Vec<BreakdownSlice> {
        let lookup: HashMap<&str, &Category> = categories
            .iter()
            .map(|category| (category.id.as_str(), category))
            .collect();
        let mut slices: Vec<BreakdownSlice> = Self::expenses_by_category(transactions)
            .into_iter()
            .map(|(category_id, amount)| {
                let (name, color) = match lookup.get(category_id.as_str()) {
                    Some(category) => (category.name.clone(), category.color.clone()),
                    None => (UNCATEGORIZED_LABEL.into(), UNCATEGORIZED_COLOR.into()),
                };
                BreakdownSlice {
                    category_id,
                    name,
                    color,
                    amount,
                }
            })
            .collect();
        slices.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category_id.cmp(&b.category_id))
        });
        slices
    }

    fn total_for(transactions: &[Transaction], kind: TransactionKind) -> i64 {
        transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .fold(0i64, |sum, txn| sum.saturating_add(txn.amount))
    }
}
