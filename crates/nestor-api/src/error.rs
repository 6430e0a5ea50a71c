//! Maps domain `AppError` to HTTP responses.
//!
//! `AppError` lives in `nestor-core`, so the response mapping hangs off the
//! local [`ApiError`] wrapper. Handlers return `Result<_, ApiError>` and `?`
//! converts any `AppError` on the way out.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use nestor_core::error::{AppError, ErrorKind};

const INTERNAL_MESSAGE: &str = "Internal server error.";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub error: String,
    /// Machine-readable error code.
    pub code: String,
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::IncompleteInput => StatusCode::BAD_REQUEST,
        ErrorKind::DuplicateUsername
        | ErrorKind::DuplicateCollectionName
        | ErrorKind::DuplicateKeyName => StatusCode::CONFLICT,
        ErrorKind::UserNotFound | ErrorKind::TokenNotFound | ErrorKind::CollectionNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorKind::InvalidCredentials | ErrorKind::MissingToken | ErrorKind::Forbidden => {
            StatusCode::FORBIDDEN
        }
        ErrorKind::Conflict
        | ErrorKind::Database
        | ErrorKind::Hashing
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// An [`AppError`] on its way to becoming an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self(err) = self;
        let status = status_for(err.kind);

        let (message, code) = if err.kind.is_domain() {
            (err.message.clone(), err.kind.to_string())
        } else {
            tracing::error!(
                kind = %err.kind,
                error = %err.message,
                source = ?err.source,
                "Internal server error"
            );
            (INTERNAL_MESSAGE.to_string(), ErrorKind::Internal.to_string())
        };

        let body = ApiErrorResponse {
            success: false,
            error: message,
            code,
        };

        let mut response = (status, Json(body)).into_response();
        // Read back by the fatal-error middleware.
        response.extensions_mut().insert(err.kind);
        response
    }
}
