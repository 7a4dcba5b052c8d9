//! Redis-backed durable store.

use crate::domain::entities::{ShortCode, StoredEntry};
use crate::domain::errors::StoreError;
use crate::domain::repositories::EntryStore;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// Namespace prefix for short-link keys.
pub const KEY_PREFIX: &str = "short:";

/// Upper bound on a single attempt to establish the connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Redis key holding the entry for `code`: `short:<code>`.
pub fn redis_key(code: &ShortCode) -> String {
    format!("{KEY_PREFIX}{code}")
}

/// Expiry passed to `SET EX`. Redis rejects zero, so sub-second TTLs round up.
pub fn expiry_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

/// Durable store keeping entries as JSON strings under `short:<code>` with a
/// per-key expiry.
///
/// The connection is established on first use and shared afterwards through a
/// `ConnectionManager`, which reconnects on its own. A failed attempt leaves
/// the store unconnected and the next operation tries again, so a Redis that
/// is down at startup is picked up once it comes back.
///
/// Errors are returned to the caller; degradation is the job of
/// [`super::FallbackStore`].
pub struct RedisStore {
    client: Client,
    connection: OnceCell<ConnectionManager>,
}

impl RedisStore {
    /// Creates a store for `redis_url` without connecting.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL cannot be parsed.
    pub fn open(redis_url: &str) -> Result<Self, StoreError> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        Ok(Self {
            client,
            connection: OnceCell::new(),
        })
    }

    /// Sends a PING, connecting first if needed.
    pub async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        conn.ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))
    }

    async fn connection(&self) -> Result<ConnectionManager, StoreError> {
        let manager = self
            .connection
            .get_or_try_init(|| async {
                debug!("Connecting to Redis");

                let manager =
                    tokio::time::timeout(CONNECT_TIMEOUT, ConnectionManager::new(self.client.clone()))
                        .await
                        .map_err(|_| {
                            StoreError::Connection("Timed out connecting to Redis".to_string())
                        })?
                        .map_err(|e| {
                            StoreError::Connection(format!("Failed to connect to Redis: {}", e))
                        })?;

                info!("✓ Connected to Redis");
                Ok::<_, StoreError>(manager)
            })
            .await?;

        Ok(manager.clone())
    }
}

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        if e.is_io_error() {
            Self::Connection(e.to_string())
        } else {
            Self::Command(e.to_string())
        }
    }
}

#[async_trait]
impl EntryStore for RedisStore {
    async fn get(&self, code: &ShortCode) -> Result<Option<StoredEntry>, StoreError> {
        let mut conn = self.connection().await?;

        match conn.get::<_, Option<String>>(redis_key(code)).await? {
            Some(raw) => {
                debug!(code = %code, "Redis HIT");
                StoredEntry::decode(&raw).map(Some)
            }
            None => {
                debug!(code = %code, "Redis MISS");
                Ok(None)
            }
        }
    }

    async fn put(
        &self,
        code: &ShortCode,
        entry: &StoredEntry,
        ttl: Duration,
    ) -> Result<(), StoreError> {
        let value = entry.encode()?;
        let ttl_seconds = expiry_seconds(ttl);
        let mut conn = self.connection().await?;

        conn.set_ex::<_, _, ()>(redis_key(code), value, ttl_seconds)
            .await?;
        debug!(code = %code, ttl_seconds, "Redis SET");

        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.ping().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }

    fn is_durable(&self) -> bool {
        true
    }
}
