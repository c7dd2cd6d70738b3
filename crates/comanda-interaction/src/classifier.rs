//! Intent classification over a [`ChatAgent`].
//!
//! The classifier asks the model for a JSON object matching the intent
//! schema and decodes it strictly. Decode failures are not errors: the
//! system's only defense against an unreliable model is to downgrade the
//! turn to a general query carrying the raw input. Only a transport-level
//! failure (model unreachable) surfaces as an error.

use std::sync::Arc;

use comanda_core::error::{ComandaError, Result};
use comanda_core::intent::Intent;

use crate::agent::{ChatAgent, PromptMessage};

const CLASSIFIER_RULES: &str = r#"You are a restaurant order assistant. Analyze the user input and classify the intent.
You must return a valid JSON object in the following format:
{
    "intent_type": "order" | "menu_inquiry" | "general_query",
    "items": [
        {
            "name": "Margherita Pizza",
            "quantity": 1,
            "special_instructions": null
        }
    ],
    "query_details": null
}

Rules:
- For orders: include the items array with details
- For menu inquiries: set items to null, include query_details
- For general queries: set items to null, include query_details
- If the user expresses intent to confirm or place their order (using phrases like 'yes', 'confirm', 'place order', 'order as it is', 'that's it' etc.), treat it as an order intent with no items"#;

/// Classifies one user turn into an [`Intent`].
pub struct IntentClassifier {
    agent: Arc<dyn ChatAgent>,
}

impl IntentClassifier {
    pub fn new(agent: Arc<dyn ChatAgent>) -> Self {
        Self { agent }
    }

    /// Sends user input, retrieved menu context and the conversation so far
    /// to the model and decodes the reply.
    ///
    /// Never fails on malformed model output; see module docs.
    pub async fn classify(
        &self,
        user_input: &str,
        menu_context: &str,
        chat_history: &str,
    ) -> Result<Intent> {
        let messages = vec![
            PromptMessage::system(CLASSIFIER_RULES),
            PromptMessage::user(user_input),
            PromptMessage::system(format!("Context from menu: {menu_context}")),
            PromptMessage::system(format!("Conversation so far:\n{chat_history}")),
        ];

        let raw = self
            .agent
            .complete(&messages)
            .await
            .map_err(|err| ComandaError::model(err.to_string()))?;

        match parse_intent(&raw) {
            Some(intent) => Ok(intent),
            None => {
                tracing::warn!(reply = %raw, "intent decode failed, falling back to general query");
                Ok(Intent::general_query_fallback(user_input))
            }
        }
    }
}

/// Extracts and strictly decodes the first JSON object found in `raw`.
///
/// Models wrap JSON in prose and code fences; everything outside the
/// outermost braces is ignored.
fn parse_intent(raw: &str) -> Option<Intent> {
    let json = extract_json_object(raw)?;
    serde_json::from_str(json).ok()
}

fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use comanda_core::intent::IntentKind;

    use super::*;
    use crate::agent::AgentError;

    /// Agent stub that replies with a fixed string or fails.
    struct StubAgent {
        reply: std::result::Result<String, String>,
    }

    impl StubAgent {
        fn replying(reply: &str) -> Arc<dyn ChatAgent> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
            })
        }

        fn failing(message: &str) -> Arc<dyn ChatAgent> {
            Arc::new(Self {
                reply: Err(message.to_string()),
            })
        }
    }

    #[async_trait]
    impl ChatAgent for StubAgent {
        async fn complete(
            &self,
            _messages: &[PromptMessage],
        ) -> std::result::Result<String, AgentError> {
            self.reply
                .clone()
                .map_err(|message| AgentError::Transport(message))
        }
    }

    #[tokio::test]
    async fn test_classify_decodes_order_intent_from_fenced_json() {
        let agent = StubAgent::replying(
            "Sure, here is the classification:\n```json\n{\"intent_type\": \"order\", \"items\": [{\"name\": \"Margherita Pizza\", \"quantity\": 2}]}\n```",
        );
        let classifier = IntentClassifier::new(agent);
        let intent = classifier.classify("two margheritas", "", "").await.unwrap();
        assert_eq!(intent.kind, IntentKind::Order);
        assert_eq!(intent.requested_items()[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_classify_falls_back_on_garbage_output() {
        let agent = StubAgent::replying("I am sorry, I cannot help with that.");
        let classifier = IntentClassifier::new(agent);
        let intent = classifier
            .classify("what time do you open?", "", "")
            .await
            .unwrap();
        assert_eq!(intent.kind, IntentKind::GeneralQuery);
        assert_eq!(
            intent.query_details.as_deref(),
            Some("what time do you open?")
        );
    }

    #[tokio::test]
    async fn test_classify_falls_back_on_schema_violation() {
        let agent = StubAgent::replying(r#"{"intent_type": "chitchat"}"#);
        let classifier = IntentClassifier::new(agent);
        let intent = classifier.classify("hello there", "", "").await.unwrap();
        assert_eq!(intent.kind, IntentKind::GeneralQuery);
    }

    #[tokio::test]
    async fn test_classify_propagates_transport_failure() {
        let agent = StubAgent::failing("connection refused");
        let classifier = IntentClassifier::new(agent);
        let err = classifier.classify("hi", "", "").await.unwrap_err();
        assert!(matches!(err, ComandaError::Model(_)));
    }

    #[test]
    fn test_extract_json_object_spans_outermost_braces() {
        let raw = "noise {\"a\": {\"b\": 1}} trailing";
        assert_eq!(extract_json_object(raw), Some("{\"a\": {\"b\": 1}}"));
        assert_eq!(extract_json_object("no braces"), None);
    }
}
