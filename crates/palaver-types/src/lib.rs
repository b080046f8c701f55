//! Shared domain types for Palaver.
//!
//! This crate contains the core domain types used across the service:
//! chat sessions and messages, the provider-facing prompt types, the
//! configuration schema, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod completion;
pub mod config;
pub mod error;
