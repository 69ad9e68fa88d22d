//! Entry metadata store
//!
//! Per-entry key/value storage owned by the host form engine. Unlike the
//! TTL cache, records never expire on their own; they live as long as the
//! entry does. Each record remembers its owning form so the host can
//! clean up by form.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::cache::CacheError;

/// Per-entry metadata storage.
pub trait EntryMetaStore: Send + Sync {
    /// Reads a record. Returns None if the entry has no such key.
    fn get(&self, entry_id: u64, key: &str) -> Result<Option<String>, CacheError>;

    /// Writes a record, associated with the form that owns the entry.
    fn set(&self, entry_id: u64, key: &str, value: &str, form_id: u32) -> Result<(), CacheError>;
}

#[derive(Debug, Clone)]
struct MetaRecord {
    value: String,
    form_id: u32,
}

/// In-memory `EntryMetaStore`
#[derive(Debug, Default)]
pub struct MemoryEntryMeta {
    records: Mutex<HashMap<(u64, String), MetaRecord>>,
}

impl MemoryEntryMeta {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form a record was stored for.
    pub fn form_of(&self, entry_id: u64, key: &str) -> Option<u32> {
        self.lock()
            .get(&(entry_id, key.to_string()))
            .map(|record| record.form_id)
    }

    /// Deletes every record owned by a form. Returns how many were removed.
    pub fn remove_form(&self, form_id: u32) -> usize {
        let mut records = self.lock();
        let before = records.len();
        records.retain(|_, record| record.form_id != form_id);
        before - records.len()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<(u64, String), MetaRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EntryMetaStore for MemoryEntryMeta {
    fn get(&self, entry_id: u64, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self
            .lock()
            .get(&(entry_id, key.to_string()))
            .map(|record| record.value.clone()))
    }

    fn set(&self, entry_id: u64, key: &str, value: &str, form_id: u32) -> Result<(), CacheError> {
        let record = MetaRecord {
            value: value.to_string(),
            form_id,
        };
        self.lock().insert((entry_id, key.to_string()), record);
        Ok(())
    }
}
