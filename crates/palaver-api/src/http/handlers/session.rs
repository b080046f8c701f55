//! Chat session HTTP handlers.
//!
//! Endpoints:
//! - POST   /api/chats      - Create a chat session
//! - GET    /api/chats      - List chat sessions, most recently active first
//! - DELETE /api/chats/{id} - Delete a session and its messages

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use uuid::Uuid;

use palaver_types::chat::ChatSession;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for creating a chat session.
#[derive(Debug, Deserialize)]
pub struct CreateChatRequest {
    /// Optional display title; the fixed placeholder applies when absent.
    #[serde(default)]
    pub title: Option<String>,
}

/// Parse a UUID from a path parameter, returning a 400 error on invalid format.
pub(crate) fn parse_uuid(s: &str) -> Result<Uuid, AppError> {
    s.parse::<Uuid>()
        .map_err(|_| AppError::Validation(format!("Invalid UUID: {s}")))
}

/// POST /api/chats - Create a new chat session.
pub async fn create_chat(
    State(state): State<AppState>,
    Json(body): Json<CreateChatRequest>,
) -> Result<Json<ChatSession>, AppError> {
    let session = state.chat_service.create_session(body.title).await?;
    Ok(Json(session))
}

/// GET /api/chats - List all sessions ordered by recent activity.
pub async fn list_chats(State(state): State<AppState>) -> Result<Json<Vec<ChatSession>>, AppError> {
    let sessions = state.chat_service.list_sessions().await?;
    Ok(Json(sessions))
}

/// DELETE /api/chats/{id} - Delete a session and its messages.
///
/// Idempotent: unknown ids still get the deleted acknowledgement.
pub async fn delete_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_uuid(&chat_id)?;
    state.chat_service.delete_session(&id).await?;
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
