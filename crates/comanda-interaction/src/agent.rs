//! The text-in/text-out agent abstraction.
//!
//! Both capabilities the system consumes from a language model — structured
//! intent classification and free-form phrasing — share one call shape:
//! a role-tagged message list in, raw text out. Everything on top of that
//! (schema decode, fallback policy) lives in the callers.

use async_trait::async_trait;
use thiserror::Error;

/// Role of a prompt message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptRole {
    System,
    User,
}

impl PromptRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptRole::System => "system",
            PromptRole::User => "user",
        }
    }
}

/// One role-tagged message of an outbound prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::User,
            content: content.into(),
        }
    }
}

/// Errors surfaced by a [`ChatAgent`] implementation.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The request never produced a usable HTTP response.
    #[error("agent request failed: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("agent API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("malformed agent response: {0}")]
    MalformedResponse(String),
}

/// A blocking-per-turn language-model collaborator.
#[async_trait]
pub trait ChatAgent: Send + Sync {
    /// Sends the messages and returns the model's raw text reply.
    async fn complete(&self, messages: &[PromptMessage]) -> Result<String, AgentError>;
}
