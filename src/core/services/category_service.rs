use crate::core::errors::{FinanceError, Result};
use crate::domain::category::{default_categories, Category};
use crate::domain::common::find_by_id;
use crate::domain::transaction::Transaction;
use crate::storage::{Collection, Store};

/// CRUD over the category collection, including the cascade into transactions.
#[derive(Debug, Clone)]
pub struct CategoryService {
    store: Store,
}

impl CategoryService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Returns stored categories, seeding the default set on first use.
    pub fn list(&self) -> Result<Vec<Category>> {
        if let Some(categories) = self.store.read(Collection::Categories)? {
            return Ok(categories);
        }
        let defaults = default_categories();
        self.store.write(Collection::Categories, &defaults)?;
        tracing::info!(count = defaults.len(), "seeded default categories");
        Ok(defaults)
    }

    pub fn get(&self, id: &str) -> Result<Option<Category>> {
        Ok(find_by_id(self.list()?, id))
    }

    /// Like [`CategoryService::get`], but a missing id is an error.
    pub fn require(&self, id: &str) -> Result<Category> {
        self.get(id)?.ok_or_else(|| FinanceError::NotFound {
            entity: "Category",
            id: id.to_string(),
        })
    }

    pub fn create(&self, name: &str, color: &str) -> Result<Category> {
        let name = Self::validate_name(name)?;
        let mut categories = self.list()?;
        let category = Category::new(name, color);
        categories.push(category.clone());
        self.store.write(Collection::Categories, &categories)?;
        tracing::info!(id = %category.id, name = %category.name, "created category");
        Ok(category)
    }

    /// Replaces name and color in place. An unknown `id` leaves the collection
    /// untouched; the returned record reflects the requested values either way.
    pub fn update(&self, id: &str, name: &str, color: &str) -> Result<Category> {
        let name = Self::validate_name(name)?;
        let updated = Category::with_id(id, name, color);
        let mut categories = self.list()?;
        match categories.iter_mut().find(|category| category.id == id) {
            Some(existing) => {
                existing.name = updated.name.clone();
                existing.color = updated.color.clone();
                self.store.write(Collection::Categories, &categories)?;
                tracing::info!(%id, "updated category");
            }
            None => tracing::debug!(%id, "update skipped, category not found"),
        }
        Ok(updated)
    }

    /// Removes the category and clears every transaction reference to it.
    ///
    /// References are cleared even when no stored category carries `id`, so
    /// dangling ids left on transactions are dropped as well.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut categories = self.list()?;
        let before = categories.len();
        categories.retain(|category| category.id != id);
        let removed = categories.len() != before;

        let mut transactions: Vec<Transaction> =
            self.store.read(Collection::Transactions)?.unwrap_or_default();
        let cleared = transactions
            .iter_mut()
            .map(|txn| txn.clear_category(id))
            .filter(|cleared| *cleared)
            .count();

        if removed {
            self.store.write(Collection::Categories, &categories)?;
        }
        if cleared > 0 {
            self.store.write(Collection::Transactions, &transactions)?;
        }
        if removed || cleared > 0 {
            tracing::info!(%id, removed, cleared, "deleted category");
        } else {
            tracing::debug!(%id, "delete skipped, category not found");
        }
        Ok(())
    }

    fn validate_name(candidate: &str) -> Result<&str> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            Err(FinanceError::validation("Category name must not be empty"))
        } else {
            Ok(trimmed)
        }
    }
}
