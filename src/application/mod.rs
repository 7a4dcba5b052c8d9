//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations by combining storage traits, code
//! generation and encoding, and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::registry_service::RegistryService`] - Short link creation and resolution

pub mod services;
