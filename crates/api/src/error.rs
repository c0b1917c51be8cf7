use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tally_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Two observable classes: expected not-found conditions (404) and
/// everything else (500). Implements [`IntoResponse`] so both resources
/// produce the same `{ "error": { "message", "status" } }` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tally-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// A not-found error for any entity, keyed by code or id.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        AppError::Core(CoreError::NotFound {
            entity,
            id: id.to_string(),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": {
                "message": message,
                "status": status.as_u16(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// `RowNotFound` maps to 404. Every other failure, constraint violations
/// included, maps to 500 with the underlying message passed through.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) => {
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                db_err.message().to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}
