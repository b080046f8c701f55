//! Completion provider abstraction for Palaver.
//!
//! Defines the `CompletionClient` trait that the infrastructure layer
//! implements over the concrete provider protocol.

pub mod client;
