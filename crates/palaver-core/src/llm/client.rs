//! CompletionClient trait definition.
//!
//! The single seam between the chat pipeline and the external completion
//! provider. Provider choice (endpoint, model, credentials) is carried by
//! the implementation's configuration, never by additional code paths.

use palaver_types::completion::{CompletionError, PromptMessage};

/// Trait for chat-completion provider backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in palaver-infra (e.g., `OpenAiCompatClient`).
pub trait CompletionClient: Send + Sync {
    /// Human-readable provider name used in logs (e.g., "openai").
    fn name(&self) -> &str;

    /// Send the assembled context and return the reply text.
    ///
    /// Must enforce a hard request timeout and never retry. A missing
    /// reply field in an otherwise successful response is a
    /// [`CompletionError::Malformed`], not an empty string.
    fn complete(
        &self,
        context: &[PromptMessage],
    ) -> impl std::future::Future<Output = Result<String, CompletionError>> + Send;
}
