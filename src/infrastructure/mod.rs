//! Infrastructure layer for external integrations.
//!
//! Implements the storage contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - Redis, in-memory and fallback store implementations

pub mod store;
