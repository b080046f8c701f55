//! Completion provider request types and errors for Palaver.
//!
//! These types model the context sent to the external chat-completion
//! endpoint: role/content pairs with the system instruction prepended at
//! assembly time, and the error taxonomy for provider failures.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::chat::{ChatMessage, MessageRole};

/// Role of a message in the provider-bound context.
///
/// Unlike [`MessageRole`], this set includes `system`: the system
/// instruction exists only in assembled contexts, never in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for PromptRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptRole::System => write!(f, "system"),
            PromptRole::User => write!(f, "user"),
            PromptRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl From<MessageRole> for PromptRole {
    fn from(role: MessageRole) -> Self {
        match role {
            MessageRole::User => PromptRole::User,
            MessageRole::Assistant => PromptRole::Assistant,
        }
    }
}

/// A single role/content pair in a provider-bound context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

impl PromptMessage {
    /// Build a context message carrying the system instruction.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::System,
            content: content.into(),
        }
    }
}

impl From<&ChatMessage> for PromptMessage {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role.into(),
            content: message.content.clone(),
        }
    }
}

/// Errors from completion provider calls.
///
/// All variants are recoverable request failures: the pipeline surfaces
/// them to the caller without retrying, and a failed completion leaves the
/// already-persisted user message in place.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("provider request failed: {0}")]
    Transport(String),

    #[error("provider request timed out after {0}s")]
    Timeout(u64),

    #[error("provider returned HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_prompt_role_serde() {
        let role = PromptRole::System;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"system\"");
        let parsed: PromptRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, PromptRole::System);
    }

    #[test]
    fn test_prompt_role_from_message_role() {
        assert_eq!(PromptRole::from(MessageRole::User), PromptRole::User);
        assert_eq!(
            PromptRole::from(MessageRole::Assistant),
            PromptRole::Assistant
        );
    }

    #[test]
    fn test_prompt_message_from_chat_message() {
        let message = ChatMessage {
            id: Uuid::now_v7(),
            session_id: Uuid::now_v7(),
            role: MessageRole::Assistant,
            content: "reply text".to_string(),
            timestamp: Utc::now(),
        };
        let prompt = PromptMessage::from(&message);
        assert_eq!(prompt.role, PromptRole::Assistant);
        assert_eq!(prompt.content, "reply text");
    }

    #[test]
    fn test_prompt_message_wire_shape() {
        let prompt = PromptMessage {
            role: PromptRole::User,
            content: "hello".to_string(),
        };
        let json = serde_json::to_string(&prompt).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hello"}"#);
    }

    #[test]
    fn test_completion_error_display() {
        let err = CompletionError::Status {
            status: 503,
            detail: "overloaded".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("overloaded"));

        let err = CompletionError::Timeout(60);
        assert!(err.to_string().contains("60"));
    }
}
