//! HTTP middleware for request processing.
//!
//! Provides observability and failure-containment middleware.

pub mod catch_panic;
pub mod tracing;
