//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::domain::LookupError;
use crate::domain::entities::ShortCode;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_origin::extract_origin_from_headers;

/// Redirects a short code to the calculator with its stored state.
///
/// # Endpoint
///
/// `GET /s/{code}` (legacy aliases: `GET /redirect/{code}`, `GET /api/{code}`)
///
/// # Request Flow
///
/// 1. Extract public origin from forwarded headers / Host
/// 2. Look the code up (durable store, then in-memory fallback)
/// 3. Return 302 Found to `<origin><stored query>`
///
/// # Errors
///
/// Returns 400 Bad Request if the code is missing or unreadable.
/// Returns 404 Not Found if the code is unknown or expired.
pub async fn redirect_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    code: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(code) = code.map_err(|rejection| {
        debug!("Rejected short code: {}", rejection.body_text());
        AppError::from(LookupError::InvalidCode)
    })?;

    let origin = extract_origin_from_headers(&headers)?;
    let code = ShortCode::from(code);

    let target = state.registry.resolve(&code, &origin).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, target.url)]).into_response())
}
