//! Shared state injected into every handler.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::RegistryService;
use crate::domain::repositories::EntryStore;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

/// Registry wired to runtime-selected store and generator.
pub type Registry = RegistryService<dyn EntryStore, dyn CodeGenerator>;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub store: Arc<dyn EntryStore>,
}

impl AppState {
    /// Builds state around `store` using random 6-character codes.
    pub fn new(store: Arc<dyn EntryStore>, ttl: Duration) -> Self {
        Self::with_generator(store, Arc::new(RandomCodeGenerator::new()), ttl)
    }

    pub fn with_generator(
        store: Arc<dyn EntryStore>,
        generator: Arc<dyn CodeGenerator>,
        ttl: Duration,
    ) -> Self {
        let registry = Arc::new(RegistryService::with_ttl(store.clone(), generator, ttl));
        Self { registry, store }
    }
}
