//! Domain types representing expense categories.

use serde::{Deserialize, Serialize};

use crate::domain::common::{generate_id, Identifiable};

/// A named, colored tag applicable to expense transactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl Category {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self::with_id(generate_id(), name, color)
    }

    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

const DEFAULT_CATEGORIES: [(&str, &str, &str); 8] = [
    ("cat1", "Groceries", "#4CAF50"),
    ("cat2", "Transportation", "#2196F3"),
    ("cat3", "Utilities", "#FF9800"),
    ("cat4", "Rent", "#9C27B0"),
    ("cat5", "Entertainment", "#F44336"),
    ("cat6", "Dining", "#795548"),
    ("cat7", "Healthcare", "#607D8B"),
    ("cat8", "Education", "#3F51B5"),
];

/// The category set written to a store that has never held categories.
pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(id, name, color)| Category::with_id(*id, *name, *color))
        .collect()
}
