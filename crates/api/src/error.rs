use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use trivia_core::error::CoreError;

/// Fixed client-facing messages, one per status the API produces.
///
/// Clients match on these strings, so they are part of the wire contract.
pub const MSG_NOT_FOUND: &str = "resource not found";
pub const MSG_METHOD_NOT_ALLOWED: &str = "method not allowed";
pub const MSG_UNPROCESSABLE: &str = "unprocessable";
pub const MSG_BAD_REQUEST: &str = "bad request";
pub const MSG_INTERNAL: &str = "internal server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{success: false, message}`
/// JSON envelope every error response shares.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `trivia_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request; the detail is logged, not sent to the client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error; the detail is logged, not sent to the client.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Resource not found");
                    (StatusCode::NOT_FOUND, MSG_NOT_FOUND)
                }
                CoreError::Unprocessable(msg) => {
                    tracing::debug!(detail = %msg, "Unprocessable request");
                    (StatusCode::UNPROCESSABLE_ENTITY, MSG_UNPROCESSABLE)
                }
                CoreError::Validation(msg) => {
                    tracing::debug!(detail = %msg, "Validation failed");
                    (StatusCode::UNPROCESSABLE_ENTITY, MSG_UNPROCESSABLE)
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL)
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                tracing::debug!(detail = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, MSG_BAD_REQUEST)
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL)
            }
        };

        let body = json!({
            "success": false,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and envelope message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign-key violations (PostgreSQL error code 23503) map to 422: the
///   request named a category that does not exist.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, MSG_NOT_FOUND),
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some("23503") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                tracing::debug!(constraint, "Foreign-key violation");
                return (StatusCode::UNPROCESSABLE_ENTITY, MSG_UNPROCESSABLE);
            }
            tracing::error!(error = %db_err, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL)
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL)
        }
    }
}

/// Router fallback for unknown paths: 404 in the shared envelope.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        axum::Json(json!({ "success": false, "message": MSG_NOT_FOUND })),
    )
        .into_response()
}

/// Router fallback for known paths hit with the wrong method: 405 in the
/// shared envelope.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        axum::Json(json!({ "success": false, "message": MSG_METHOD_NOT_ALLOWED })),
    )
        .into_response()
}
