//! GroqApiAgent - direct REST implementation for the Groq chat API.
//!
//! Groq exposes an OpenAI-compatible chat-completions endpoint; this agent
//! calls it directly with reqwest. The API key and model name come from the
//! application settings layer.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::agent::{AgentError, ChatAgent, PromptMessage};

/// Model used when no override is configured.
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";
const BASE_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Low temperature keeps the intent JSON stable across retries of the same
/// phrasing.
const DEFAULT_TEMPERATURE: f32 = 0.1;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Agent implementation that talks to the Groq HTTP API.
#[derive(Clone)]
pub struct GroqApiAgent {
    client: Client,
    api_key: String,
    model: String,
    temperature: f32,
}

impl GroqApiAgent {
    /// Creates a new agent with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    async fn send_request(&self, body: &ChatCompletionRequest) -> Result<String, AgentError> {
        let response = self
            .client
            .post(BASE_URL)
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| AgentError::Transport(format!("Groq API request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read Groq error body".to_string());
            return Err(AgentError::Api {
                status: status.as_u16(),
                message: body_text,
            });
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            AgentError::MalformedResponse(format!("failed to parse Groq response: {err}"))
        })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AgentError::MalformedResponse("Groq response had no choices".into()))?;

        Ok(choice.message.content.trim().to_string())
    }
}

#[async_trait]
impl ChatAgent for GroqApiAgent {
    async fn complete(&self, messages: &[PromptMessage]) -> Result<String, AgentError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: messages
                .iter()
                .map(|m| ChatMessage {
                    role: m.role.as_str(),
                    content: m.content.clone(),
                })
                .collect(),
            temperature: self.temperature,
        };

        tracing::debug!(model = %self.model, messages = request.messages.len(), "sending chat completion request");
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}
