//! Storage backends for short-link entries.
//!
//! Provides three [`EntryStore`](crate::domain::repositories::EntryStore)
//! implementations:
//! - [`RedisStore`] - Durable backend with per-key expiry
//! - [`MemoryStore`] - Process-local map used when Redis is absent or failing
//! - [`FallbackStore`] - Decorator composing the two

mod fallback_store;
mod memory_store;
mod redis_store;

pub use fallback_store::FallbackStore;
pub use memory_store::MemoryStore;
pub use redis_store::{KEY_PREFIX, RedisStore};
