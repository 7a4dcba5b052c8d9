//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable, or running in-memory by configuration
/// - **503 Service Unavailable**: Redis configured but not answering PING;
///   requests are being served from the in-memory fallback
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": {
///       "status": "ok",
///       "message": "redis connected"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;

    let healthy = store_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { store: store_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks store connectivity via the backend's own health probe.
async fn check_store(state: &AppState) -> CheckStatus {
    let backend = state.store.backend();

    if !state.store.is_durable() {
        return CheckStatus {
            status: "ok".to_string(),
            message: Some("In-memory store only (durable store disabled)".to_string()),
        };
    }

    if state.store.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} connected", backend)),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!(
                "{} unreachable, serving from in-memory fallback",
                backend
            )),
        }
    }
}
