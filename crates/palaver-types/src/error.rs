//! Error types shared across the Palaver crates.

use crate::completion::CompletionError;

/// Errors raised by the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A query failed at the database level.
    #[error("query failed: {0}")]
    Query(String),

    /// A stored value could not be mapped back into a domain type.
    #[error("corrupt stored data: {0}")]
    Corrupt(String),
}

/// Errors surfaced by chat operations.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The requested chat session does not exist.
    #[error("chat session not found")]
    SessionNotFound,

    /// The completion provider call failed.
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// The persistence layer failed.
    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}
