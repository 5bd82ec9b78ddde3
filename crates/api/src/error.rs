//! Application error type and the single error-to-HTTP translator.
//!
//! Every handler returns [`AppResult`]; all failure paths funnel through
//! the [`IntoResponse`] impl below, which maps each error class to a
//! status code and a `{ "success": false, ... }` JSON body. Internal
//! details are logged server-side and never leak to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use ordersvc_core::types::DbId;

/// Application-level error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An identifier that does not parse as a UUID reference.
    #[error("Invalid id: {value}")]
    InvalidId { value: String },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Field-level validation failures, reported as an `errors` array.
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    /// An explicitly-checked not-found condition with its client message.
    #[error("{0}")]
    NotFound(String),

    /// An internal error with a human-readable message (logged, not returned).
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Parse a wire identifier into a [`DbId`], rejecting malformed values.
pub fn parse_id(value: &str) -> Result<DbId, AppError> {
    value.parse::<DbId>().map_err(|_| AppError::InvalidId {
        value: value.to_string(),
    })
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Validation errors carry an array body; everything else a message.
        let (status, body) = match &self {
            AppError::Database(err) => {
                let (status, message) = classify_sqlx_error(err);
                (status, json!({ "success": false, "message": message }))
            }

            AppError::InvalidId { .. } => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "message": self.to_string() }),
            ),

            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "message": msg }),
            ),

            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "errors": errors }),
            ),

            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "message": msg }),
            ),

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "success": false, "message": "Server Error" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and client message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (PostgreSQL 23505) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => (
            StatusCode::CONFLICT,
            "Duplicate field value entered".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Server Error".to_string())
        }
    }
}
