//! Business logic and repository trait definitions for Palaver.
//!
//! This crate defines the "ports" (repository and completion-client traits)
//! that the infrastructure layer implements, plus the chat pipeline that
//! orchestrates them. It depends only on `palaver-types` -- never on
//! `palaver-infra` or any database/HTTP crate.

pub mod chat;
pub mod llm;
