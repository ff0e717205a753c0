//! HTTP error response conversion
//!
//! Every failure leaving a handler is converted to the fixed-shape envelope
//! `{success: false, message}`. The caller sees one generic message per
//! endpoint; the underlying cause (database unreachable, disk write failure)
//! is only logged, never surfaced.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use civicfix_core::{AppError, ErrorMetadata, LogLevel};
use civicfix_storage::StorageError;
use serde::{Deserialize, Serialize};

/// Fixed response envelope for the submit and update-status operations.
/// The list operation intentionally returns a raw array instead.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub success: bool,
    pub message: String,
}

impl ResponseEnvelope {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Wrapper type for AppError to implement IntoResponse.
/// Necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (type from civicfix-core).
///
/// `message` overrides the client-facing text with the endpoint's generic
/// failure message; the real error still drives status code and logging.
#[derive(Debug)]
pub struct HttpAppError {
    error: AppError,
    message: Option<&'static str>,
}

impl HttpAppError {
    pub fn with_message(error: impl Into<HttpAppError>, message: &'static str) -> Self {
        Self {
            message: Some(message),
            ..error.into()
        }
    }
}

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError {
            error: err,
            message: None,
        }
    }
}

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::InvalidKey(msg) => AppError::BadRequest(msg),
            StorageError::NotFound(msg) => AppError::NotFound(msg),
            other => AppError::Storage(other.to_string()),
        };
        HttpAppError::from(app)
    }
}

/// Log an error at the level its metadata prescribes
fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(&self.error);

        let message = self
            .message
            .map(String::from)
            .unwrap_or_else(|| self.error.client_message());

        (status, Json(ResponseEnvelope::error(message))).into_response()
    }
}
