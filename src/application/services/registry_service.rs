//! Short link creation and resolution service.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::entities::{OriginInfo, ParameterSet, ScenarioList, ShortCode, StoredEntry};
use crate::domain::repositories::EntryStore;
use crate::domain::{LookupError, StoreError, ValidationError};
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_codec;

/// Lifetime of entries in the durable backend: 7 days.
pub const DEFAULT_TTL: Duration = Duration::from_secs(604_800);

/// Errors surfaced by [`RegistryService`].
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Every configured backend failed. Only reachable when the fallback
    /// store itself reports an error.
    #[error("storage backend unavailable: {0}")]
    BackendUnavailable(#[from] StoreError),
}

/// A freshly created short link.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortLink {
    pub short_url: String,
    pub short_code: ShortCode,
}

/// Where a resolved short link should redirect (HTTP 302).
#[derive(Debug, Clone, PartialEq)]
pub struct RedirectTarget {
    pub url: String,
}

/// Service for creating and resolving short links.
///
/// Combines a [`CodeGenerator`], the query codec and an [`EntryStore`].
/// Both operations are single-shot: no locking, no retries, and a colliding
/// code overwrites the previous entry.
pub struct RegistryService<S: EntryStore + ?Sized, G: CodeGenerator + ?Sized> {
    store: Arc<S>,
    generator: Arc<G>,
    ttl: Duration,
}

impl<S: EntryStore + ?Sized, G: CodeGenerator + ?Sized> RegistryService<S, G> {
    /// Creates a registry with the default 7-day TTL.
    pub fn new(store: Arc<S>, generator: Arc<G>) -> Self {
        Self::with_ttl(store, generator, DEFAULT_TTL)
    }

    pub fn with_ttl(store: Arc<S>, generator: Arc<G>, ttl: Duration) -> Self {
        Self {
            store,
            generator,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Creates a short link for the given calculator state.
    ///
    /// # Arguments
    ///
    /// - `params` - Raw `params` payload; must be a JSON object
    /// - `scenarios` - Comparison scenarios stored alongside the URL
    /// - `origin` - Public origin used to build the returned short URL
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if `params` is not an object.
    /// Returns [`RegistryError::BackendUnavailable`] if the entry could not be
    /// written anywhere.
    pub async fn shorten(
        &self,
        params: &Value,
        scenarios: ScenarioList,
        origin: &OriginInfo,
    ) -> Result<ShortLink, RegistryError> {
        let params = ParameterSet::from_json(params)?;

        let code = self.generator.generate();
        let url = url_codec::encode(&params, &scenarios);
        let entry = StoredEntry::new(url, scenarios);

        self.store.put(&code, &entry, self.ttl).await?;

        let short_url = Self::short_url(origin, &code);
        info!(code = %code, backend = self.store.backend(), "Short link created");

        Ok(ShortLink {
            short_url,
            short_code: code,
        })
    }

    /// Resolves a short code to its absolute redirect URL.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidCode`] for an empty code and
    /// [`LookupError::NotFound`] if no backend holds it.
    pub async fn resolve(
        &self,
        code: &ShortCode,
        origin: &OriginInfo,
    ) -> Result<RedirectTarget, RegistryError> {
        if code.is_empty() {
            return Err(LookupError::InvalidCode.into());
        }

        let entry = self
            .store
            .get(code)
            .await?
            .ok_or(LookupError::NotFound)?;

        debug!(code = %code, "Short link resolved");

        Ok(RedirectTarget {
            url: format!("{}{}", origin.base_url(), entry.url),
        })
    }

    /// Builds the public short URL: `<base>/s/<code>`.
    pub fn short_url(origin: &OriginInfo, code: &ShortCode) -> String {
        format!("{}/s/{}", origin.base_url(), code)
    }
}
