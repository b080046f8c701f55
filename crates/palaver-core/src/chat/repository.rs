//! ChatRepository trait definition.
//!
//! Provides persistence operations for chat sessions and messages. The
//! backend is treated as a document store: no referential constraints are
//! assumed, and session/message consistency is the pipeline's job.

use chrono::{DateTime, Utc};
use palaver_types::chat::{ChatMessage, ChatSession};
use palaver_types::error::RepositoryError;
use uuid::Uuid;

/// Repository trait for chat session and message persistence.
///
/// Implementations live in palaver-infra (e.g., `SqliteChatRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ChatRepository: Send + Sync {
    /// Persist a new chat session.
    fn create_session(
        &self,
        session: &ChatSession,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Get a chat session by its unique ID. Returns `None` when absent.
    fn get_session(
        &self,
        session_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<ChatSession>, RepositoryError>> + Send;

    /// List all sessions, ordered by `updated_at` DESC (most recently
    /// active first).
    fn list_sessions(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ChatSession>, RepositoryError>> + Send;

    /// Delete a session record.
    ///
    /// Idempotent: deleting a nonexistent id succeeds without error.
    fn delete_session(
        &self,
        session_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Advance a session's `updated_at` to the given instant.
    ///
    /// Touching a session that was deleted concurrently is a silent no-op.
    fn touch_session(
        &self,
        session_id: &Uuid,
        updated_at: DateTime<Utc>,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Persist a new message.
    fn save_message(
        &self,
        message: &ChatMessage,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// List all messages for a session, ordered by `timestamp` ASC with
    /// insertion sequence breaking ties. Unknown sessions yield an empty
    /// list.
    fn list_messages(
        &self,
        session_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, RepositoryError>> + Send;

    /// Delete every message belonging to a session.
    ///
    /// Idempotent: deletes zero or more records, never errors on none.
    fn delete_messages(
        &self,
        session_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
