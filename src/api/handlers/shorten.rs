//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use tracing::debug;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::domain::ValidationError;
use crate::domain::entities::ScenarioList;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_origin::extract_origin_from_headers;

/// Creates a short link for a calculator state.
///
/// # Endpoint
///
/// `POST /shorten` (also `POST /api/shorten`)
///
/// # Request Body
///
/// ```json
/// {
///   "params": { "term": 36, "servers": 8, "taxRate": 0.21 },
///   "scenarios": [ { "name": "high utilization", "utilization": 0.9 } ]
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortURL": "https://calc.example.com/s/aB3xY9",
///   "shortCode": "aB3xY9"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or `params` is not an object.
/// Returns 503 Service Unavailable if no store accepted the write.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!("Rejected shorten body: {}", rejection.body_text());
        AppError::from(ValidationError::InvalidParameters)
    })?;

    let origin = extract_origin_from_headers(&headers)?;
    let scenarios = ScenarioList::from_json(payload.scenarios.as_ref());

    let link = state
        .registry
        .shorten(&payload.params, scenarios, &origin)
        .await?;

    Ok(Json(ShortenResponse {
        short_url: link.short_url,
        short_code: link.short_code.into_inner(),
    }))
}
