//! History assembly: stored messages into a provider-ready context.
//!
//! The assembler is a pure function. It defines exactly what the model
//! sees for a given transcript, so it is kept deterministic, side-effect
//! free, and tested in isolation.

use palaver_types::chat::ChatMessage;
use palaver_types::completion::PromptMessage;

/// System instruction prepended to every assembled context.
///
/// Never persisted: the stored transcript holds only `user` and
/// `assistant` turns, and this string is synthesized at read time.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str =
    "You are a helpful assistant. Answer questions clearly and format any code in proper code blocks.";

/// Render a session's ordered message history into the role/content list
/// the completion provider expects.
///
/// The system instruction comes first, then every stored message's
/// role/content pair in the order given. No truncation, filtering, or
/// summarization.
pub fn assemble_context(system_instruction: &str, history: &[ChatMessage]) -> Vec<PromptMessage> {
    let mut context = Vec::with_capacity(history.len() + 1);
    context.push(PromptMessage::system(system_instruction));
    context.extend(history.iter().map(PromptMessage::from));
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use palaver_types::chat::MessageRole;
    use palaver_types::completion::PromptRole;
    use uuid::Uuid;

    fn message(role: MessageRole, content: &str) -> ChatMessage {
        ChatMessage {
            id: Uuid::now_v7(),
            session_id: Uuid::now_v7(),
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_empty_history_yields_system_instruction_only() {
        let context = assemble_context(DEFAULT_SYSTEM_INSTRUCTION, &[]);
        assert_eq!(context.len(), 1);
        assert_eq!(context[0].role, PromptRole::System);
        assert_eq!(context[0].content, DEFAULT_SYSTEM_INSTRUCTION);
    }

    #[test]
    fn test_system_instruction_always_first() {
        let history = vec![
            message(MessageRole::User, "hello"),
            message(MessageRole::Assistant, "hi"),
        ];
        let context = assemble_context("be terse", &history);
        assert_eq!(context[0].role, PromptRole::System);
        assert_eq!(context[0].content, "be terse");
    }

    #[test]
    fn test_message_order_preserved() {
        let history = vec![
            message(MessageRole::User, "first"),
            message(MessageRole::Assistant, "second"),
            message(MessageRole::User, "third"),
        ];
        let context = assemble_context(DEFAULT_SYSTEM_INSTRUCTION, &history);
        assert_eq!(context.len(), 4);
        assert_eq!(context[1].content, "first");
        assert_eq!(context[1].role, PromptRole::User);
        assert_eq!(context[2].content, "second");
        assert_eq!(context[2].role, PromptRole::Assistant);
        assert_eq!(context[3].content, "third");
        assert_eq!(context[3].role, PromptRole::User);
    }

    #[test]
    fn test_content_passes_through_unmodified() {
        let content = "  raw\ntext with   spacing\tand symbols {}[]<> ";
        let history = vec![message(MessageRole::User, content)];
        let context = assemble_context(DEFAULT_SYSTEM_INSTRUCTION, &history);
        assert_eq!(context[1].content, content);
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let history = vec![
            message(MessageRole::User, "one"),
            message(MessageRole::Assistant, "two"),
        ];
        let first = assemble_context(DEFAULT_SYSTEM_INSTRUCTION, &history);
        let second = assemble_context(DEFAULT_SYSTEM_INSTRUCTION, &history);
        assert_eq!(first, second);
    }
}
