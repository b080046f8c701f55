//! Application error type mapping to HTTP status codes.
//!
//! The HTTP layer is the only place the error taxonomy flattens to status
//! codes: NotFound and CompletionError stay distinct all the way here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use palaver_types::error::ChatError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat pipeline errors.
    Chat(ChatError),
    /// Validation error (malformed path parameter or body).
    Validation(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Chat(ChatError::SessionNotFound) => (
                StatusCode::NOT_FOUND,
                "SESSION_NOT_FOUND",
                "Chat session not found".to_string(),
            ),
            AppError::Chat(ChatError::Completion(e)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "COMPLETION_ERROR",
                e.to_string(),
            ),
            AppError::Chat(ChatError::Storage(e)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                e.to_string(),
            ),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
        };

        let body = json!({
            "error": {
                "code": code,
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palaver_types::completion::CompletionError;
    use palaver_types::error::RepositoryError;

    #[test]
    fn test_session_not_found_maps_to_404() {
        let resp = AppError::Chat(ChatError::SessionNotFound).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_completion_error_maps_to_500() {
        let err = ChatError::Completion(CompletionError::Timeout(60));
        let resp = AppError::Chat(err).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_error_maps_to_500() {
        let err = ChatError::Storage(RepositoryError::Query("disk I/O error".to_string()));
        let resp = AppError::Chat(err).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let resp = AppError::Validation("Invalid UUID: nope".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
