//! Chat message HTTP handlers.
//!
//! Endpoints:
//! - GET  /api/chats/{id}/messages - List a session's transcript
//! - POST /api/chats/{id}/messages - Send a message and return the reply

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use palaver_types::chat::{ChatExchange, ChatMessage};

use crate::http::error::AppError;
use crate::http::handlers::session::parse_uuid;
use crate::state::AppState;

/// Request body for sending a message.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

/// GET /api/chats/{id}/messages - List messages in transcript order.
///
/// Unknown session ids yield an empty list.
pub async fn list_messages(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    let id = parse_uuid(&chat_id)?;
    let messages = state.chat_service.list_messages(&id).await?;
    Ok(Json(messages))
}

/// POST /api/chats/{id}/messages - Run one full message exchange.
///
/// Returns the persisted user message together with the provider's reply.
/// 404 when the session does not exist; 500 with detail when the
/// completion fails, in which case the user message stays in the
/// transcript.
pub async fn send_message(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
    Json(body): Json<SendMessageRequest>,
) -> Result<Json<ChatExchange>, AppError> {
    let id = parse_uuid(&chat_id)?;
    let exchange = state.chat_service.send_message(&id, body.content).await?;
    Ok(Json(exchange))
}
