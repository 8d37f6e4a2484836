use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use manila_core::builder::MSG_INTERNAL_ERROR;
use manila_core::error::EnvelopeError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`EnvelopeError`] for malformed response-building calls and adds a
/// catch-all internal variant. Implements [`IntoResponse`] so a bad call
/// surfaces as a sanitized 500 JSON envelope at the framework boundary
/// instead of unwinding the request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A malformed response-building call (invalid status code, redirect,
    /// status flag, or non-object payload).
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Envelope(err) => {
                tracing::error!(error = %err, "Malformed response-building call");
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
            }
        }

        // The body never carries the original error details; it is the
        // standard error envelope with the stock internal-error message.
        let body = json!({
            "status": "error",
            "redirect_to": null,
            "data": null,
            "error": {
                "message": MSG_INTERNAL_ERROR,
                "status_code": 500,
            },
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
