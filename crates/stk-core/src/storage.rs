//! Key/value durability collaborator
//!
//! The store writes its whole record list through to a [`KeyValueStore`]
//! after every mutation and can reload it with `restore`.

use crate::error::StorageError;
use dashmap::DashMap;

/// Minimal string key/value backend
pub trait KeyValueStore: Send + Sync {
    /// Value under `key`, if any
    ///
    /// # Errors
    /// Backend-specific failures.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Backend-specific failures.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; absent keys are not an error
    ///
    /// # Errors
    /// Backend-specific failures.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process backend over a concurrent map
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: DashMap<String, String>,
}

impl MemoryKeyValueStore {
    /// Create empty backend
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys held
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_delete() {
        let kv = MemoryKeyValueStore::new();
        assert_eq!(kv.get("a").unwrap(), None);

        kv.set("a", "1").unwrap();
        kv.set("a", "2").unwrap();
        assert_eq!(kv.get("a").unwrap().as_deref(), Some("2"));
        assert_eq!(kv.len(), 1);

        kv.delete("a").unwrap();
        kv.delete("a").unwrap();
        assert!(kv.is_empty());
    }
}
