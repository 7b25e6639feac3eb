pub mod json_backend;
pub mod memory_backend;

use std::{fmt, path::PathBuf, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};

use crate::core::errors::{FinanceError, Result};

pub use json_backend::JsonFileStorage;
pub use memory_backend::MemoryStorage;

/// Abstraction over the raw key-value medium holding encoded collections.
pub trait StorageBackend: Send + Sync {
    /// Returns `None` when `key` has never been written.
    fn read_raw(&self, key: &str) -> Result<Option<String>>;
    fn write_raw(&self, key: &str, data: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// The named collections kept in a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Categories,
    Transactions,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Categories, Collection::Transactions];

    pub fn key(&self) -> &'static str {
        match self {
            Collection::Categories => "categories",
            Collection::Transactions => "transactions",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Shared handle to a storage backend, encoding collections as JSON arrays.
///
/// Cloning is cheap; every clone talks to the same backend.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
}

impl Store {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    pub fn json(root: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(JsonFileStorage::new(root.into())?))
    }

    /// Reads a collection. `Ok(None)` means it was never initialised, which is
    /// distinct from a stored empty collection.
    pub fn read<T: DeserializeOwned>(&self, collection: Collection) -> Result<Option<Vec<T>>> {
        let Some(raw) = self.backend.read_raw(collection.key())? else {
            return Ok(None);
        };
        decode(collection, &raw).map(Some)
    }

    pub fn write<T: Serialize>(&self, collection: Collection, items: &[T]) -> Result<()> {
        let raw = encode(items)?;
        self.backend.write_raw(collection.key(), &raw)
    }

    /// Removes both collections; the next read sees an uninitialised store.
    pub fn clear(&self) -> Result<()> {
        tracing::info!("clearing finance store");
        self.backend.clear()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

pub fn encode<T: Serialize>(items: &[T]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}

pub fn decode<T: DeserializeOwned>(collection: Collection, raw: &str) -> Result<Vec<T>> {
    serde_json::from_str(raw).map_err(|source| {
        tracing::error!(%collection, error = %source, "stored collection failed to decode");
        FinanceError::CorruptState {
            collection: collection.key(),
            source,
        }
    })
}
