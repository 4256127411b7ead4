use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Content loading never produces one of these: data failures are absorbed
/// by the loader and the page is served with the section unchanged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The requested page does not exist or escapes the site root.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Reading a page from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{path} not found"),
            ),
            AppError::Io(err) => {
                tracing::error!(error = %err, "Failed to read page");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                self.to_string(),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
