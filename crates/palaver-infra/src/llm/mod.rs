//! Completion provider implementation.
//!
//! One concrete [`CompletionClient`] speaking the OpenAI-compatible chat
//! completions protocol. Provider choice is configuration (base URL, model,
//! key environment variable), not separate code paths.
//!
//! [`CompletionClient`]: palaver_core::llm::client::CompletionClient

pub mod openai;
