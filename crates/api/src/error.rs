use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// The original service discarded serialization errors and wrote an empty
/// 200 body; here the encode step is fallible and failures surface as a
/// 500 JSON error response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Payload could not be encoded to JSON.
    #[error("Failed to encode response payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Encode(err) => {
                tracing::error!(error = %err, "Failed to encode response payload");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ENCODE_FAILED",
                    "Failed to encode response payload".to_string(),
                )
            }
        };

        let body = axum::Json(json!({
            "error": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}
