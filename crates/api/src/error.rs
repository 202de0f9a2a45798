use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use medialib_core::genre::DuplicateGenre;
use medialib_core::types::ContentId;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses
/// of the shape `{ "error": <message>, "code": <CODE> }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Requested content identifier does not exist.
    #[error("Content with id {0} not found")]
    ContentNotFound(ContentId),

    /// A listing matched nothing. The content API reports empty result
    /// sets as 404.
    #[error("No content found")]
    NoContent,

    /// An add-genres request named a genre already on the record.
    #[error(transparent)]
    DuplicateGenre(#[from] DuplicateGenre),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::ContentNotFound(id) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("Content with id {id} not found"),
            ),
            AppError::NoContent => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "No content found".to_string(),
            ),
            AppError::DuplicateGenre(err) => {
                tracing::warn!(genre = %err.genre, "Rejected duplicate genre");
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
            }
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (PostgreSQL error 23505) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            (
                StatusCode::CONFLICT,
                "CONFLICT",
                format!("Duplicate value violates unique constraint: {constraint}"),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
