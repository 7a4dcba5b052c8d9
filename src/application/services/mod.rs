//! Business logic services for the application layer.

pub mod registry_service;

pub use registry_service::{
    DEFAULT_TTL, RedirectTarget, RegistryError, RegistryService, ShortLink,
};
