//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//! - [`errors`] - Validation, lookup and storage error types
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Orchestration lives in [`crate::application::services`].

pub mod entities;
pub mod errors;
pub mod repositories;

pub use errors::{LookupError, StoreError, ValidationError};
