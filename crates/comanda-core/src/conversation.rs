//! Conversation transcript types.
//!
//! A session keeps a linear transcript of user and assistant messages. The
//! transcript is rendered into the intent-classification prompt so the model
//! can resolve references like "make that two" or "yes, place it".

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Message from the customer.
    User,
    /// Message from the ordering assistant.
    Assistant,
}

impl MessageRole {
    /// Returns the role as the lowercase tag used in prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A single message in a conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
    /// Timestamp when the message was created (ISO 8601 format).
    pub timestamp: String,
}

impl ConversationMessage {
    /// Creates a user message stamped with the current time.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Creates an assistant message stamped with the current time.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Renders a transcript as `role: content` lines for prompt injection.
pub fn render_transcript(messages: &[ConversationMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.role.as_str(), m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_transcript() {
        let messages = vec![
            ConversationMessage::user("do you have pizza?"),
            ConversationMessage::assistant("We have the Margherita Pizza."),
        ];
        let rendered = render_transcript(&messages);
        assert_eq!(
            rendered,
            "user: do you have pizza?\nassistant: We have the Margherita Pizza."
        );
    }

    #[test]
    fn test_render_empty_transcript() {
        assert_eq!(render_transcript(&[]), "");
    }
}
