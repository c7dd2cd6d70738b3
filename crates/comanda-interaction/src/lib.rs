//! Language-model collaborators for Comanda.
//!
//! This crate owns everything that talks to a language model: the
//! [`ChatAgent`] abstraction, the Groq REST implementation, the intent
//! classifier, and the free-form responder used for menu inquiries and
//! general questions.

pub mod agent;
pub mod classifier;
pub mod groq_api_agent;
pub mod responder;

pub use agent::{AgentError, ChatAgent, PromptMessage, PromptRole};
pub use classifier::IntentClassifier;
pub use groq_api_agent::{DEFAULT_GROQ_MODEL, GroqApiAgent};
pub use responder::FreeFormResponder;
