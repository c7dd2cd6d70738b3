//! Domain model and pure logic for the Comanda order-taking assistant.
//!
//! This crate holds everything that does not talk to the outside world:
//! the menu catalog and its keyword matcher, intent types, the order draft
//! (the running order accumulated across turns), summary rendering, and the
//! port traits implemented by the infrastructure crate.

pub mod conversation;
pub mod error;
pub mod intent;
pub mod menu;
pub mod order;

// Re-export common error type
pub use error::{ComandaError, Result};
