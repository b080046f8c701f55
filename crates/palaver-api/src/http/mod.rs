//! HTTP/REST API layer for Palaver.
//!
//! Axum-based REST API at `/api/` with CORS support.

pub mod error;
pub mod handlers;
pub mod router;
