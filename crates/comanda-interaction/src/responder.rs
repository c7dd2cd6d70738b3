//! Free-form natural-language answers grounded in retrieved menu context.

use std::sync::Arc;

use comanda_core::error::{ComandaError, Result};

use crate::agent::{ChatAgent, PromptMessage};

const MENU_INQUIRY_SYSTEM: &str = "You are a helpful restaurant assistant. \
    Generate a natural response about menu items using the provided context.";

const GENERAL_QUERY_SYSTEM: &str = "You are a helpful restaurant assistant, an automated service to collect orders. \
    You respond in a short, very conversational friendly style. \
    Use the provided context to understand the user's intent and then answer their questions about the menu. \
    If the user asks for more information, provide a detailed description of the menu item.";

/// Phrases menu inquiries and general questions over retrieved context.
pub struct FreeFormResponder {
    agent: Arc<dyn ChatAgent>,
}

impl FreeFormResponder {
    pub fn new(agent: Arc<dyn ChatAgent>) -> Self {
        Self { agent }
    }

    /// Answers a menu question the keyword matcher could not resolve.
    pub async fn menu_inquiry(&self, query: &str, context: &str) -> Result<String> {
        let messages = vec![
            PromptMessage::system(MENU_INQUIRY_SYSTEM),
            PromptMessage::user(query),
            PromptMessage::system(format!("Context: {context}")),
        ];
        self.send(&messages).await
    }

    /// Answers a general question about the restaurant.
    pub async fn general_query(&self, query: &str, context: &str) -> Result<String> {
        let messages = vec![
            PromptMessage::system(GENERAL_QUERY_SYSTEM),
            PromptMessage::user(format!("Context: {context}\n\nQuery: {query}")),
        ];
        self.send(&messages).await
    }

    async fn send(&self, messages: &[PromptMessage]) -> Result<String> {
        self.agent
            .complete(messages)
            .await
            .map_err(|err| ComandaError::model(err.to_string()))
    }
}
