//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use vidsnap_core::error::{AppError, ErrorKind};

/// Standard API error response body: `{path, status, message}`.
///
/// `path` is null here; the error envelope middleware fills it in with
/// the request path before the response leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Request path, injected by middleware.
    pub path: Option<String>,
    /// HTTP status code.
    pub status: u16,
    /// Human-readable message.
    pub message: String,
}

/// Newtype over [`AppError`] carrying the HTTP response mapping.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            _ => {
                tracing::error!(kind = %self.0.kind, error = %self.0.message, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = if self.0.message.is_empty() {
            "Internal Server Error".to_string()
        } else {
            self.0.message
        };

        let body = ApiErrorResponse {
            path: None,
            status: status.as_u16(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
