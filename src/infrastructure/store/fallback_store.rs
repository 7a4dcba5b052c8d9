//! Two-tier store: durable primary, in-process secondary.

use crate::domain::entities::{ShortCode, StoredEntry};
use crate::domain::errors::StoreError;
use crate::domain::repositories::EntryStore;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error, trace, warn};

/// Store that tries `primary` and degrades to `secondary`.
///
/// # Operation Strategy
///
/// - **Put**: Write to the primary. On error, write to the secondary instead
///   (no retry). An entry lives in exactly one tier.
/// - **Get**: Read the primary. On a miss or an error, read the secondary,
///   which holds whatever was written while the primary was failing.
///
/// Primary errors are logged and swallowed. Only a secondary failure reaches
/// the caller.
///
/// # Type Parameters
///
/// * `P` - The durable store (e.g. [`super::RedisStore`])
/// * `S` - The fallback store (e.g. [`super::MemoryStore`])
#[derive(Debug, Clone)]
pub struct FallbackStore<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackStore<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

#[async_trait]
impl<P, S> EntryStore for FallbackStore<P, S>
where
    P: EntryStore,
    S: EntryStore,
{
    async fn get(&self, code: &ShortCode) -> Result<Option<StoredEntry>, StoreError> {
        match self.primary.get(code).await {
            Ok(Some(entry)) => return Ok(Some(entry)),
            Ok(None) => trace!(code = %code, "Primary miss, checking fallback"),
            Err(e) => warn!(code = %code, error = %e, "Primary read failed, checking fallback"),
        }

        let entry = self.secondary.get(code).await?;
        if entry.is_some() {
            debug!(code = %code, backend = self.secondary.backend(), "Served from fallback");
        }
        Ok(entry)
    }

    async fn put(
        &self,
        code: &ShortCode,
        entry: &StoredEntry,
        ttl: Duration,
    ) -> Result<(), StoreError> {
        let Err(e) = self.primary.put(code, entry, ttl).await else {
            return Ok(());
        };

        warn!(
            code = %code,
            error = %e,
            "Primary write failed, storing in fallback without expiry"
        );

        self.secondary.put(code, entry, ttl).await.inspect_err(|e| {
            error!(code = %code, error = %e, "Fallback write failed");
        })
    }

    async fn health_check(&self) -> bool {
        self.primary.health_check().await
    }

    fn backend(&self) -> &'static str {
        self.primary.backend()
    }

    fn is_durable(&self) -> bool {
        self.primary.is_durable()
    }
}
