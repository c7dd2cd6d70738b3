//! Classified intent of a single user turn.
//!
//! The intent schema doubles as the wire contract with the language model:
//! the classifier asks the model to emit a JSON object that deserializes
//! into [`Intent`]. Deserialization is strict serde, but the field contract
//! (`items` only for orders, `query_details` only for inquiries) is enforced
//! loosely on purpose — the model violates it often enough that the dialogue
//! layer must tolerate stray fields rather than fail the turn.

use serde::{Deserialize, Serialize};

/// The classified purpose of a user's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    /// Placing or extending an order, or confirming a pending one.
    Order,
    /// Asking what is on the menu.
    MenuInquiry,
    /// Anything else (opening hours, ingredients, small talk).
    GeneralQuery,
}

/// An item the user asked for, as extracted by the language model.
///
/// Not yet validated against the catalog; resolution happens when the item
/// is folded into the order draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedItem {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

impl RequestedItem {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            special_instructions: None,
        }
    }
}

/// One turn's classification result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(rename = "intent_type")]
    pub kind: IntentKind,
    #[serde(default)]
    pub items: Option<Vec<RequestedItem>>,
    #[serde(default)]
    pub query_details: Option<String>,
}

impl Intent {
    /// The fallback intent used whenever the model's output cannot be
    /// decoded: treat the raw input as a general question.
    pub fn general_query_fallback(user_input: &str) -> Self {
        Self {
            kind: IntentKind::GeneralQuery,
            items: None,
            query_details: Some(user_input.to_string()),
        }
    }

    /// Requested items, empty when the model sent none.
    pub fn requested_items(&self) -> &[RequestedItem] {
        self.items.as_deref().unwrap_or(&[])
    }
}
