//! Process-local fallback store.

use crate::domain::entities::{ShortCode, StoredEntry};
use crate::domain::errors::StoreError;
use crate::domain::repositories::EntryStore;
use async_trait::async_trait;
use dashmap::DashMap;
use std::time::Duration;
use tracing::debug;

/// In-memory map from code to entry.
///
/// Entries never expire and are lost when the process exits; the map grows
/// without bound. Writes cannot fail.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, StoredEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, code: &ShortCode) -> bool {
        self.entries.contains_key(code.as_str())
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn get(&self, code: &ShortCode) -> Result<Option<StoredEntry>, StoreError> {
        Ok(self
            .entries
            .get(code.as_str())
            .map(|entry| entry.value().clone()))
    }

    /// Stores the entry. `ttl` is ignored.
    async fn put(
        &self,
        code: &ShortCode,
        entry: &StoredEntry,
        _ttl: Duration,
    ) -> Result<(), StoreError> {
        let previous = self.entries.insert(code.as_str().to_owned(), entry.clone());
        if previous.is_some() {
            debug!(code = %code, "Overwrote existing in-memory entry");
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }

    fn is_durable(&self) -> bool {
        false
    }
}
