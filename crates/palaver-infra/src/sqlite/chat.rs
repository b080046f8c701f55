//! SQLite chat repository implementation.
//!
//! Implements `ChatRepository` from `palaver-core` using sqlx with split
//! read/write pools: raw queries, private Row structs, textual timestamps
//! parsed on every read.
//!
//! The schema intentionally carries no foreign key between sessions and
//! messages. The store behaves like a document database: referential
//! consistency is the pipeline's job, and deletes are independent
//! best-effort statements.

use chrono::{DateTime, Utc};
use palaver_core::chat::repository::ChatRepository;
use palaver_types::chat::{ChatMessage, ChatSession, MessageRole};
use palaver_types::error::RepositoryError;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ChatRepository`.
pub struct SqliteChatRepository {
    pool: DatabasePool,
}

impl SqliteChatRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row types for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

/// Internal row type for mapping SQLite rows to domain ChatSession.
struct ChatSessionRow {
    id: String,
    title: String,
    created_at: String,
    updated_at: String,
}

impl ChatSessionRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_session(self) -> Result<ChatSession, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Corrupt(format!("invalid session id: {e}")))?;
        let created_at = parse_datetime(&self.created_at)?;
        let updated_at = parse_datetime(&self.updated_at)?;

        Ok(ChatSession {
            id,
            title: self.title,
            created_at,
            updated_at,
        })
    }
}

/// Internal row type for mapping SQLite rows to domain ChatMessage.
struct ChatMessageRow {
    id: String,
    session_id: String,
    role: String,
    content: String,
    timestamp: String,
}

impl ChatMessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            session_id: row.try_get("session_id")?,
            role: row.try_get("role")?,
            content: row.try_get("content")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_message(self) -> Result<ChatMessage, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Corrupt(format!("invalid message id: {e}")))?;
        let session_id = Uuid::parse_str(&self.session_id)
            .map_err(|e| RepositoryError::Corrupt(format!("invalid session_id: {e}")))?;
        let role: MessageRole = self
            .role
            .parse()
            .map_err(|e: String| RepositoryError::Corrupt(e))?;
        let timestamp = parse_datetime(&self.timestamp)?;

        Ok(ChatMessage {
            id,
            session_id,
            role,
            content: self.content,
            timestamp,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Corrupt(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

// ---------------------------------------------------------------------------
// ChatRepository implementation
// ---------------------------------------------------------------------------

impl ChatRepository for SqliteChatRepository {
    async fn create_session(&self, session: &ChatSession) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO chat_sessions (id, title, created_at, updated_at)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(session.id.to_string())
        .bind(&session.title)
        .bind(format_datetime(&session.created_at))
        .bind(format_datetime(&session.updated_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn get_session(&self, session_id: &Uuid) -> Result<Option<ChatSession>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM chat_sessions WHERE id = ?")
            .bind(session_id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let session_row = ChatSessionRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(session_row.into_session()?))
            }
            None => Ok(None),
        }
    }

    async fn list_sessions(&self) -> Result<Vec<ChatSession>, RepositoryError> {
        // RFC 3339 UTC strings compare lexicographically in time order;
        // id DESC (UUIDv7, time-ordered) makes equal-instant ordering
        // deterministic.
        let rows = sqlx::query("SELECT * FROM chat_sessions ORDER BY updated_at DESC, id DESC")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut sessions = Vec::with_capacity(rows.len());
        for row in &rows {
            let session_row = ChatSessionRow::from_row(row)
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            sessions.push(session_row.into_session()?);
        }

        Ok(sessions)
    }

    async fn delete_session(&self, session_id: &Uuid) -> Result<(), RepositoryError> {
        // Deleting a nonexistent id affects zero rows and is not an error.
        sqlx::query("DELETE FROM chat_sessions WHERE id = ?")
            .bind(session_id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn touch_session(
        &self,
        session_id: &Uuid,
        updated_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        // Zero affected rows means the session vanished concurrently;
        // silent no-op by contract.
        sqlx::query("UPDATE chat_sessions SET updated_at = ? WHERE id = ?")
            .bind(format_datetime(&updated_at))
            .bind(session_id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn save_message(&self, message: &ChatMessage) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO chat_messages (id, session_id, role, content, timestamp)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(message.id.to_string())
        .bind(message.session_id.to_string())
        .bind(message.role.to_string())
        .bind(&message.content)
        .bind(format_datetime(&message.timestamp))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list_messages(&self, session_id: &Uuid) -> Result<Vec<ChatMessage>, RepositoryError> {
        // rowid breaks ties for messages written in the same instant:
        // messages are never individually deleted, so insertion order and
        // rowid order coincide.
        let rows = sqlx::query(
            "SELECT * FROM chat_messages WHERE session_id = ? ORDER BY timestamp ASC, rowid ASC",
        )
        .bind(session_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let msg_row = ChatMessageRow::from_row(row)
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            messages.push(msg_row.into_message()?);
        }

        Ok(messages)
    }

    async fn delete_messages(&self, session_id: &Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM chat_messages WHERE session_id = ?")
            .bind(session_id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }
}
