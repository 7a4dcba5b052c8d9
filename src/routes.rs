//! Top-level router configuration.
//!
//! # Route Structure
//!
//! See [`crate::api::routes::public_routes`].
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic containment** - Handler panics become JSON 500 responses
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{catch_panic, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api::routes::public_routes()
        .with_state(state)
        .layer(catch_panic::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
