//! Handler for unsupported methods on known routes.

use crate::error::AppError;

/// Answers `405 Method Not Allowed` with a JSON error body.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
