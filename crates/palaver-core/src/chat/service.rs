//! Chat service orchestrating the message pipeline.
//!
//! ChatService coordinates the ChatRepository and CompletionClient through
//! the full exchange: session lookup, user-message persistence, history
//! assembly, completion invocation, assistant-message persistence, and the
//! session timestamp refresh.

use chrono::Utc;
use palaver_types::chat::{
    ChatExchange, ChatMessage, ChatSession, DEFAULT_SESSION_TITLE, MessageRole,
};
use palaver_types::error::ChatError;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::chat::context::{DEFAULT_SYSTEM_INSTRUCTION, assemble_context};
use crate::chat::repository::ChatRepository;
use crate::llm::client::CompletionClient;

/// Orchestrates chat sessions and message exchanges.
///
/// Generic over `ChatRepository` and `CompletionClient` to maintain clean
/// architecture (palaver-core never depends on palaver-infra).
pub struct ChatService<R: ChatRepository, C: CompletionClient> {
    repository: R,
    client: C,
    system_instruction: String,
}

impl<R: ChatRepository, C: CompletionClient> ChatService<R, C> {
    /// Create a new chat service with the default system instruction.
    pub fn new(repository: R, client: C) -> Self {
        Self {
            repository,
            client,
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
        }
    }

    /// Replace the system instruction prepended to every assembled context.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    // --- Session lifecycle ---

    /// Create a new chat session.
    ///
    /// A missing title falls back to the fixed placeholder. Both timestamps
    /// start at the creation instant.
    pub async fn create_session(&self, title: Option<String>) -> Result<ChatSession, ChatError> {
        let now = Utc::now();
        let session = ChatSession {
            id: Uuid::now_v7(),
            title: title.unwrap_or_else(|| DEFAULT_SESSION_TITLE.to_string()),
            created_at: now,
            updated_at: now,
        };

        self.repository.create_session(&session).await?;
        info!(session_id = %session.id, title = %session.title, "Chat session created");
        Ok(session)
    }

    /// List all sessions, most recently active first.
    pub async fn list_sessions(&self) -> Result<Vec<ChatSession>, ChatError> {
        Ok(self.repository.list_sessions().await?)
    }

    /// Delete a session and all its messages.
    ///
    /// Two independent best-effort deletes, session record first so a
    /// partial failure never leaves a listed session with half a
    /// transcript. Idempotent: deleting an unknown id succeeds.
    pub async fn delete_session(&self, session_id: &Uuid) -> Result<(), ChatError> {
        self.repository.delete_session(session_id).await?;
        self.repository.delete_messages(session_id).await?;
        info!(session_id = %session_id, "Chat session deleted");
        Ok(())
    }

    // --- Messages ---

    /// List a session's messages in transcript order.
    ///
    /// An unknown session id yields an empty list, not an error.
    pub async fn list_messages(&self, session_id: &Uuid) -> Result<Vec<ChatMessage>, ChatError> {
        Ok(self.repository.list_messages(session_id).await?)
    }

    /// Run one full message exchange against a session.
    ///
    /// Validates the session, persists the user message, re-reads the full
    /// history, assembles the provider context, calls the provider, then
    /// persists the assistant reply and touches the session. A completion
    /// failure leaves the already-saved user message in the transcript and
    /// the session's `updated_at` untouched; only a successful full
    /// exchange marks the session fresh.
    pub async fn send_message(
        &self,
        session_id: &Uuid,
        content: String,
    ) -> Result<ChatExchange, ChatError> {
        if self.repository.get_session(session_id).await?.is_none() {
            return Err(ChatError::SessionNotFound);
        }

        let user_message = ChatMessage {
            id: Uuid::now_v7(),
            session_id: *session_id,
            role: MessageRole::User,
            content,
            timestamp: Utc::now(),
        };
        self.repository.save_message(&user_message).await?;

        let history = self.repository.list_messages(session_id).await?;
        let context = assemble_context(&self.system_instruction, &history);
        debug!(
            session_id = %session_id,
            context_messages = context.len(),
            "Assembled completion context"
        );

        let response = match self.client.complete(&context).await {
            Ok(response) => response,
            Err(err) => {
                warn!(
                    session_id = %session_id,
                    provider = self.client.name(),
                    error = %err,
                    "Completion failed, user message retained without a reply"
                );
                return Err(err.into());
            }
        };

        let assistant_message = ChatMessage {
            id: Uuid::now_v7(),
            session_id: *session_id,
            role: MessageRole::Assistant,
            content: response.clone(),
            timestamp: Utc::now(),
        };
        self.repository.save_message(&assistant_message).await?;
        self.repository.touch_session(session_id, Utc::now()).await?;

        info!(session_id = %session_id, provider = self.client.name(), "Exchange completed");
        Ok(ChatExchange {
            message: user_message,
            response,
        })
    }
}
