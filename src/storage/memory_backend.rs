use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use crate::core::errors::{FinanceError, Result};

use super::StorageBackend;

/// Process-local key-value medium. Contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    #[cfg(test)]
    fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| FinanceError::Storage("memory store lock poisoned".into()))
    }
}

impl StorageBackend for MemoryStorage {
    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write_raw(&self, key: &str, data: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), data.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read_raw("categories").unwrap(), None);
        assert!(storage.is_empty().unwrap());
    }

    #[test]
    fn write_overwrites_and_remove_is_idempotent() {
        let storage = MemoryStorage::new();
        storage.write_raw("k", "[1]").unwrap();
        storage.write_raw("k", "[2]").unwrap();
        assert_eq!(storage.read_raw("k").unwrap().as_deref(), Some("[2]"));
        storage.remove("k").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.len().unwrap(), 0);
    }
}
