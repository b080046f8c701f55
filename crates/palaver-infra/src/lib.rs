//! Infrastructure layer for Palaver.
//!
//! Concrete implementations of the palaver-core traits: SQLite-backed
//! persistence via sqlx, the OpenAI-compatible completion client via
//! reqwest, and the TOML configuration loader.

pub mod config;
pub mod llm;
pub mod sqlite;
