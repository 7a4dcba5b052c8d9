//! Storage capability for short-code entries.

use crate::domain::entities::{ShortCode, StoredEntry};
use crate::domain::errors::StoreError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Key-value store mapping short codes to [`StoredEntry`] values.
///
/// Writes are last-writer-wins: putting an existing code replaces its entry.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Durable backend with expiry
/// - [`crate::infrastructure::store::MemoryStore`] - Process-local map, no expiry
/// - [`crate::infrastructure::store::FallbackStore`] - Primary with secondary fallback
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Fetches the entry stored under `code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(entry))` if present and not expired
    /// - `Ok(None)` if the code is unknown or has expired
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be queried or the stored
    /// value is unreadable.
    async fn get(&self, code: &ShortCode) -> Result<Option<StoredEntry>, StoreError>;

    /// Stores `entry` under `code`.
    ///
    /// Backends with expiry support drop the entry after `ttl`; others may
    /// ignore it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write did not reach the backend.
    async fn put(
        &self,
        code: &ShortCode,
        entry: &StoredEntry,
        ttl: Duration,
    ) -> Result<(), StoreError>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;

    /// Short backend description for logs and health output.
    fn backend(&self) -> &'static str;

    /// Whether entries survive a process restart.
    fn is_durable(&self) -> bool;
}

#[async_trait]
impl<T: EntryStore + ?Sized> EntryStore for Arc<T> {
    async fn get(&self, code: &ShortCode) -> Result<Option<StoredEntry>, StoreError> {
        (**self).get(code).await
    }

    async fn put(
        &self,
        code: &ShortCode,
        entry: &StoredEntry,
        ttl: Duration,
    ) -> Result<(), StoreError> {
        (**self).put(code, entry, ttl).await
    }

    async fn health_check(&self) -> bool {
        (**self).health_check().await
    }

    fn backend(&self) -> &'static str {
        (**self).backend()
    }

    fn is_durable(&self) -> bool {
        (**self).is_durable()
    }
}
