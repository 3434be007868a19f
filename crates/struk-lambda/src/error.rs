use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use struk_core::error::CoreError;
use struk_export::error::ExportError;

/// Message returned for every server-side rendering failure.
pub const RENDER_FAILED: &str = "Gagal membuat PDF.";

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Payload problems; answered as plain text.
    BadRequest(String),
    /// Anything that went wrong after the payload was accepted.
    Internal { error: String, details: String },
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    details: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(reason = %msg, "rejected request");
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Internal { error, details } => {
                tracing::error!(details = %details, "{error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody { error, details }),
                )
                    .into_response()
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::IncompleteData | CoreError::MalformedPayload(_) => {
                ApiError::BadRequest(e.to_string())
            }
            other => ApiError::Internal {
                error: RENDER_FAILED.to_string(),
                details: other.to_string(),
            },
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        ApiError::Internal {
            error: RENDER_FAILED.to_string(),
            details: e.to_string(),
        }
    }
}
