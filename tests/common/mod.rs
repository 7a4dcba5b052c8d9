#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use scenario_shortener::api::routes::public_routes;
use scenario_shortener::domain::StoreError;
use scenario_shortener::domain::entities::{ShortCode, StoredEntry};
use scenario_shortener::domain::repositories::EntryStore;
use scenario_shortener::infrastructure::store::{FallbackStore, MemoryStore};
use scenario_shortener::state::AppState;
use scenario_shortener::utils::code_generator::CodeGenerator;

pub const TEST_HOST: &str = "calc.example.com";

pub const TTL: Duration = Duration::from_secs(604_800);

/// Store whose every operation fails, standing in for an unreachable Redis.
pub struct FailingStore;

#[async_trait]
impl EntryStore for FailingStore {
    async fn get(&self, _code: &ShortCode) -> Result<Option<StoredEntry>, StoreError> {
        Err(StoreError::Connection("connection refused".into()))
    }

    async fn put(
        &self,
        _code: &ShortCode,
        _entry: &StoredEntry,
        _ttl: Duration,
    ) -> Result<(), StoreError> {
        Err(StoreError::Connection("connection refused".into()))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn backend(&self) -> &'static str {
        "redis"
    }

    fn is_durable(&self) -> bool {
        true
    }
}

/// Generator that always returns the same code.
pub struct FixedCodeGenerator(pub &'static str);

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&self) -> ShortCode {
        ShortCode::from(self.0)
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (AppState::new(store.clone(), TTL), store)
}

pub fn create_fixed_code_state(code: &'static str) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::with_generator(store.clone(), Arc::new(FixedCodeGenerator(code)), TTL);
    (state, store)
}

/// State whose primary tier is down and whose fallback is `secondary`.
pub fn create_degraded_state(secondary: Arc<MemoryStore>) -> AppState {
    AppState::new(Arc::new(FallbackStore::new(FailingStore, secondary)), TTL)
}

/// State where both tiers fail.
pub fn create_unavailable_state() -> AppState {
    AppState::new(
        Arc::new(FallbackStore::new(FailingStore, FailingStore)),
        TTL,
    )
}

pub fn app(state: AppState) -> Router {
    public_routes().with_state(state)
}
