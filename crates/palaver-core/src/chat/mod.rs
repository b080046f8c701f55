//! Chat session and message handling for Palaver.
//!
//! This module defines the `ChatRepository` trait that the infrastructure
//! layer implements, the pure history-assembly step, and the `ChatService`
//! pipeline that ties persistence and completion together.

pub mod context;
pub mod repository;
pub mod service;
