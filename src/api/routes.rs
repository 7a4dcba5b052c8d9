//! API route configuration.
//!
//! All endpoints are public; there is no authentication layer.

use crate::api::handlers::{
    health_handler, method_not_allowed_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes.
///
/// # Endpoints
///
/// - `POST /shorten`         - Create a short link (alias: `POST /api/shorten`)
/// - `GET  /s/{code}`        - Redirect to the stored calculator state
/// - `GET  /redirect/{code}` - Legacy redirect alias
/// - `GET  /api/{code}`      - Legacy redirect alias
/// - `GET  /health`          - Store health check
///
/// Other methods on these paths answer `405` with a JSON body. The bare
/// `/s` and `/redirect` paths answer `400 Invalid code`.
pub fn public_routes() -> Router<AppState> {
    let shorten = post(shorten_handler).fallback(method_not_allowed_handler);
    let redirect = get(redirect_handler).fallback(method_not_allowed_handler);

    Router::new()
        .route("/shorten", shorten.clone())
        .route("/api/shorten", shorten)
        .route("/s", redirect.clone())
        .route("/s/{code}", redirect.clone())
        .route("/redirect", redirect.clone())
        .route("/redirect/{code}", redirect.clone())
        .route("/api/{code}", redirect)
        .route(
            "/health",
            get(health_handler).fallback(method_not_allowed_handler),
        )
}
