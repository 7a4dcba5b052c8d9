use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::application::services::RegistryError;
use crate::domain::{LookupError, ValidationError};

const NOT_FOUND_NOTE: &str = "Short URLs expire after 7 days. Links created while the durable store \
     was unavailable are kept in memory and lost on restart.";

const UNAVAILABLE_NOTE: &str =
    "Check REDIS_URL (or KV_URL) and that the durable store accepts connections.";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Errors returned at the HTTP boundary, rendered as `{ "error": ... }` JSON.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        note: Option<String>,
    },
    #[error("{message}")]
    NotFound {
        message: String,
        note: Option<String>,
    },
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("{message}: {reason}")]
    Unavailable {
        message: String,
        reason: String,
        note: Option<String>,
    },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            note: None,
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            note: None,
        }
    }
    pub fn unavailable(message: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
            reason: reason.into(),
            note: None,
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Attaches a remediation hint shown to the client.
    pub fn with_note(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            Self::Validation { note, .. }
            | Self::NotFound { note, .. }
            | Self::Unavailable { note, .. } => *note = Some(text.into()),
            Self::MethodNotAllowed | Self::Internal { .. } => {}
        }
        self
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::Validation { message, note } | AppError::NotFound { message, note } => {
                ErrorBody {
                    error: message,
                    note,
                    message: None,
                }
            }
            AppError::MethodNotAllowed => ErrorBody {
                error: "Method not allowed".to_string(),
                note: None,
                message: None,
            },
            AppError::Unavailable {
                message,
                reason,
                note,
            } => ErrorBody {
                error: message,
                note,
                message: Some(reason),
            },
            AppError::Internal { message } => ErrorBody {
                error: message,
                note: None,
                message: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::bad_request(e.to_string())
    }
}

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::InvalidCode => AppError::bad_request(e.to_string()),
            LookupError::NotFound => AppError::not_found(e.to_string()).with_note(NOT_FOUND_NOTE),
        }
    }
}

impl From<RegistryError> for AppError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::Validation(e) => e.into(),
            RegistryError::Lookup(e) => e.into(),
            RegistryError::BackendUnavailable(e) => {
                AppError::unavailable("Storage unavailable", e.to_string())
                    .with_note(UNAVAILABLE_NOTE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StoreError;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: AppError = ValidationError::InvalidParameters.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid parameters");
    }

    #[test]
    fn test_lookup_errors() {
        let err: AppError = LookupError::InvalidCode.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid code");

        let err: AppError = LookupError::NotFound.into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "URL not found or expired");
        assert!(matches!(err, AppError::NotFound { note: Some(_), .. }));
    }

    #[test]
    fn test_backend_unavailable_maps_to_503() {
        let err: AppError =
            RegistryError::BackendUnavailable(StoreError::Connection("refused".into())).into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn test_with_note_ignored_for_internal() {
        let err = AppError::internal("Internal server error").with_note("ignored");
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_method_not_allowed_status() {
        assert_eq!(
            AppError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
