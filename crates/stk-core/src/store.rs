//! Template store
//!
//! Holds saved [`TemplateRecord`]s newest first. Every mutation either
//! fully succeeds or leaves the store (and its backend) unchanged.

use crate::error::StorageError;
use crate::storage::KeyValueStore;
use parking_lot::RwLock;
use std::sync::Arc;
use stk_model::{TemplateDraft, TemplateId, TemplateRecord};
use stk_validation::require_savable;

/// Backend key holding the serialized record list
pub const STORE_KEY: &str = "stk.templates";

/// Thread-safe template store
pub struct TemplateStore {
    records: RwLock<Vec<TemplateRecord>>,
    backend: Option<Arc<dyn KeyValueStore>>,
}

impl std::fmt::Debug for TemplateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateStore")
            .field("records", &self.records.read().len())
            .field("persistent", &self.backend.is_some())
            .finish()
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore {
    /// Create an in-memory store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            backend: None,
        }
    }

    /// Create a store that writes through to `backend`
    ///
    /// Call [`restore`](Self::restore) to load previously saved records.
    #[inline]
    #[must_use]
    pub fn with_backend(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            backend: Some(backend),
        }
    }

    /// Reload records from the backend, replacing the in-memory list
    ///
    /// Returns the number of records held afterwards.
    ///
    /// # Errors
    /// - `StorageError::Backend` if the backend read fails
    /// - `StorageError::Corrupt` if the stored list cannot be decoded
    pub fn restore(&self) -> Result<usize, StorageError> {
        let Some(backend) = &self.backend else {
            return Ok(self.len());
        };

        let loaded = match backend.get(STORE_KEY)? {
            Some(json) => serde_json::from_str::<Vec<TemplateRecord>>(&json).map_err(|source| {
                StorageError::Corrupt {
                    key: STORE_KEY.to_string(),
                    source,
                }
            })?,
            None => Vec::new(),
        };

        let count = loaded.len();
        *self.records.write() = loaded;
        tracing::info!(count, "restored templates");
        Ok(count)
    }

    /// Save a draft as a new record
    ///
    /// # Errors
    /// - `StorageError::Rejected` if the name is blank or there are no attributes
    /// - encoding or backend errors; the store is unchanged in every case
    pub fn save(&self, draft: TemplateDraft) -> Result<TemplateId, StorageError> {
        if let Err(err) = require_savable(&draft) {
            tracing::warn!(name = %draft.name, error = %err, "save rejected");
            return Err(err.into());
        }

        let record = build_record(TemplateId::new(), draft)?;
        let id = record.id;
        let name = record.template.name.clone();

        let mut records = self.records.write();
        records.insert(0, record);
        if let Err(err) = self.persist(&records) {
            records.remove(0);
            return Err(err);
        }

        tracing::info!(%id, %name, total = records.len(), "saved template");
        Ok(id)
    }

    /// Replace an existing record's content wholesale, keeping its id and position
    ///
    /// # Errors
    /// - `StorageError::Rejected` for drafts that may not be saved
    /// - `StorageError::NotFound` if `id` is unknown
    /// - encoding or backend errors; the store is unchanged in every case
    pub fn replace(&self, id: TemplateId, draft: TemplateDraft) -> Result<(), StorageError> {
        if let Err(err) = require_savable(&draft) {
            tracing::warn!(%id, error = %err, "replace rejected");
            return Err(err.into());
        }
        let record = build_record(id, draft)?;

        let mut records = self.records.write();
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StorageError::NotFound(id))?;

        let previous = std::mem::replace(&mut records[index], record);
        if let Err(err) = self.persist(&records) {
            records[index] = previous;
            return Err(err);
        }

        tracing::info!(%id, name = %records[index].template.name, "replaced template");
        Ok(())
    }

    /// Remove a record
    ///
    /// Returns `false` (and does nothing) when `id` is absent.
    ///
    /// # Errors
    /// Backend errors; the record is kept in that case.
    pub fn remove(&self, id: TemplateId) -> Result<bool, StorageError> {
        let mut records = self.records.write();
        let Some(index) = records.iter().position(|r| r.id == id) else {
            return Ok(false);
        };

        let removed = records.remove(index);
        if let Err(err) = self.persist(&records) {
            records.insert(index, removed);
            return Err(err);
        }

        tracing::info!(%id, name = %removed.template.name, "removed template");
        Ok(true)
    }

    /// Records whose name, description or category contain `text`
    /// (case-insensitive), newest first
    ///
    /// Blank text returns every record.
    #[must_use]
    pub fn find(&self, text: &str) -> Vec<TemplateRecord> {
        let needle = text.trim().to_lowercase();
        let records = self.records.read();
        let found: Vec<_> = records
            .iter()
            .filter(|r| needle.is_empty() || r.template.matches_lowercase(&needle))
            .cloned()
            .collect();
        tracing::debug!(query = %needle, matches = found.len(), "template search");
        found
    }

    /// Record by id
    #[must_use]
    pub fn get(&self, id: TemplateId) -> Option<TemplateRecord> {
        self.records.read().iter().find(|r| r.id == id).cloned()
    }

    /// All records, newest first
    #[must_use]
    pub fn list(&self) -> Vec<TemplateRecord> {
        self.records.read().clone()
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    fn persist(&self, records: &[TemplateRecord]) -> Result<(), StorageError> {
        let Some(backend) = &self.backend else {
            return Ok(());
        };
        if records.is_empty() {
            return backend.delete(STORE_KEY);
        }
        let json = serde_json::to_string(records)?;
        backend.set(STORE_KEY, &json)
    }
}

fn build_record(id: TemplateId, draft: TemplateDraft) -> Result<TemplateRecord, StorageError> {
    let size_estimate = serde_json::to_string(&draft)?.len();
    Ok(TemplateRecord::new(id, draft, size_estimate)?)
}
