//! Chat session and message types for Palaver.
//!
//! A session is a named, timestamped conversation thread; messages are the
//! immutable turns within it, ordered by their creation timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Placeholder title for sessions created without one.
pub const DEFAULT_SESSION_TITLE: &str = "New Chat";

/// Author of a stored chat message.
///
/// This is a closed set: the system instruction is synthesized at read time
/// when the provider context is assembled, never stored as a message.
/// Maps to the CHECK constraint in the SQLite schema:
/// `CHECK (role IN ('user', 'assistant'))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A chat session between a client and the completion provider.
///
/// `updated_at` advances only after a successful full exchange and is the
/// sort key for session listings (most recently active first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single immutable message within a chat session.
///
/// Messages are ordered by `timestamp` within a session, with insertion
/// order as the tiebreak for same-instant messages. Content is opaque to
/// the pipeline: never parsed, never validated, never truncated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub session_id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Result of a successful message exchange: the persisted user message and
/// the provider's raw reply text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatExchange {
    pub message: ChatMessage,
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::User, MessageRole::Assistant] {
            let s = role.to_string();
            let parsed: MessageRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_message_role_serde() {
        let role = MessageRole::Assistant;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: MessageRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, MessageRole::Assistant);
    }

    #[test]
    fn test_message_role_rejects_system() {
        assert!("system".parse::<MessageRole>().is_err());
        assert!(serde_json::from_str::<MessageRole>("\"system\"").is_err());
    }

    #[test]
    fn test_chat_session_serialize() {
        let session = ChatSession {
            id: Uuid::now_v7(),
            title: DEFAULT_SESSION_TITLE.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"title\":\"New Chat\""));
        assert!(json.contains("\"created_at\""));
    }

    #[test]
    fn test_chat_exchange_serialize() {
        let message = ChatMessage {
            id: Uuid::now_v7(),
            session_id: Uuid::now_v7(),
            role: MessageRole::User,
            content: "hello".to_string(),
            timestamp: Utc::now(),
        };
        let exchange = ChatExchange {
            message,
            response: "hi".to_string(),
        };
        let json = serde_json::to_string(&exchange).unwrap();
        assert!(json.contains("\"message\""));
        assert!(json.contains("\"response\":\"hi\""));
        assert!(json.contains("\"role\":\"user\""));
    }
}
