//! One conversation with one customer.
//!
//! `OrderSession` owns the order draft and the transcript, and sequences a
//! turn: retrieve menu context, classify intent, branch, format text. The
//! session is an explicit context object owned by the caller; there is no
//! process-wide state, and `&mut self` per turn makes exclusive ownership a
//! compile-time guarantee instead of a locking discipline.
//!
//! A turn never escapes as an error: collaborator failures are logged and
//! rendered as polite text, so the session always survives to the next
//! turn.

use std::sync::Arc;

use comanda_core::conversation::{ConversationMessage, render_transcript};
use comanda_core::error::Result;
use comanda_core::intent::{Intent, IntentKind};
use comanda_core::menu::{MenuCatalog, MenuItem, MenuRetriever};
use comanda_core::order::{
    NEXT_STEPS_PROMPT, OrderDraft, OrderLine, OrderRepository, inr, render_summary,
};
use comanda_interaction::{ChatAgent, FreeFormResponder, IntentClassifier};

/// Snippets of menu context fetched per turn.
const RETRIEVAL_K: usize = 3;

const CLARIFICATION_PROMPT: &str =
    "I couldn't identify any items to order. Could you please specify what you'd like to order?";

const GENERIC_APOLOGY: &str =
    "I'm sorry, I'm having trouble answering right now. Could you try that again in a moment?";

/// A single customer's ordering conversation.
pub struct OrderSession {
    catalog: Arc<MenuCatalog>,
    retriever: Arc<dyn MenuRetriever>,
    classifier: IntentClassifier,
    responder: FreeFormResponder,
    orders: Arc<dyn OrderRepository>,
    draft: OrderDraft,
    transcript: Vec<ConversationMessage>,
}

impl OrderSession {
    pub fn new(
        catalog: Arc<MenuCatalog>,
        retriever: Arc<dyn MenuRetriever>,
        agent: Arc<dyn ChatAgent>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            catalog,
            retriever,
            classifier: IntentClassifier::new(agent.clone()),
            responder: FreeFormResponder::new(agent),
            orders,
            draft: OrderDraft::new(),
            transcript: Vec::new(),
        }
    }

    /// The greeting shown before the first turn.
    pub fn welcome_message(&self) -> String {
        let categories = self
            .catalog
            .categories()
            .into_iter()
            .map(|c| format!("- {c}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "Welcome to our restaurant!\n\nWe have:\n{categories}\n\nWhat would you like to order?"
        )
    }

    /// The order as accumulated so far.
    pub fn current_order(&self) -> &[OrderLine] {
        self.draft.lines()
    }

    /// Drives one conversational turn and returns the assistant's reply.
    pub async fn process_turn(&mut self, user_input: &str) -> String {
        let response = match self.run_turn(user_input).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "turn failed, answering with generic apology");
                GENERIC_APOLOGY.to_string()
            }
        };
        self.transcript.push(ConversationMessage::user(user_input));
        self.transcript
            .push(ConversationMessage::assistant(response.clone()));
        response
    }

    async fn run_turn(&mut self, user_input: &str) -> Result<String> {
        let snippets = self.retriever.search(user_input, RETRIEVAL_K).await?;
        let menu_context = snippets.join("\n");
        let history = render_transcript(&self.transcript);

        let intent = self
            .classifier
            .classify(user_input, &menu_context, &history)
            .await?;
        tracing::debug!(kind = ?intent.kind, items = intent.requested_items().len(), "intent classified");

        match intent.kind {
            IntentKind::Order => self.handle_order(&intent).await,
            IntentKind::MenuInquiry => self.handle_menu_inquiry(user_input, &intent).await,
            IntentKind::GeneralQuery => {
                let query = intent.query_details.as_deref().unwrap_or(user_input);
                self.responder.general_query(query, &menu_context).await
            }
        }
    }

    async fn handle_order(&mut self, intent: &Intent) -> Result<String> {
        let requested = intent.requested_items();

        if requested.is_empty() {
            // No items on an order intent is the confirmation signal:
            // finalize whatever has been accumulated so far.
            return if self.draft.is_empty() {
                Ok(CLARIFICATION_PROMPT.to_string())
            } else {
                Ok(self.place_order().await)
            };
        }

        let report = self.draft.add_items(&self.catalog, requested);
        let mut response = String::new();
        if report.any_added() {
            response.push_str(&format!(
                "Great! I've added {} to your order.\n",
                report.added.join(", ")
            ));
        }
        if !report.unmatched.is_empty() {
            response.push_str(&format!(
                "Sorry, I couldn't find these items on our menu: {}.\n",
                report.unmatched.join(", ")
            ));
        }
        if self.draft.is_empty() {
            response.push_str("What would you like to order instead?");
        } else {
            response.push_str(&render_summary(self.draft.lines()));
            response.push_str("\n\n");
            response.push_str(NEXT_STEPS_PROMPT);
        }
        Ok(response)
    }

    /// Finalizes the draft. On success the session clears the draft; on
    /// failure the draft is kept intact so the user can just say "place
    /// order" again.
    async fn place_order(&mut self) -> String {
        let total = self.draft.total();
        match self.orders.save_order(self.draft.lines(), total).await {
            Ok(order_id) => {
                let confirmation = confirmation_text(order_id, self.draft.lines(), total);
                self.draft.clear();
                confirmation
            }
            Err(err) => {
                tracing::error!(error = %err, "order placement failed, draft preserved");
                format!(
                    "Sorry, there was an error placing your order: {err}. \
                     Your order is unchanged, so you can try placing it again."
                )
            }
        }
    }

    async fn handle_menu_inquiry(&self, user_input: &str, intent: &Intent) -> Result<String> {
        let matches = self.catalog.find_matches(user_input);
        match matches.as_slice() {
            [] => {
                // Nothing matched by keyword; let retrieval plus the model
                // phrase an answer.
                let query = intent.query_details.as_deref().unwrap_or(user_input);
                let snippets = self.retriever.search(query, RETRIEVAL_K).await?;
                self.responder.menu_inquiry(query, &snippets.join("\n")).await
            }
            [only] => Ok(single_match_offer(only)),
            many => Ok(multi_match_listing(many)),
        }
    }
}

fn single_match_offer(item: &MenuItem) -> String {
    format!(
        "We have the {}, {} for {}. Would you like to order this?",
        item.name,
        item.description,
        inr(item.price)
    )
}

fn multi_match_listing(items: &[&MenuItem]) -> String {
    let mut response = String::from("Here are the options available:\n\n");
    for item in items {
        response.push_str(&format!("• {} - {}\n", item.name, inr(item.price)));
        response.push_str(&format!("  {}\n\n", item.description));
    }
    response.push_str("Which one would you like to order?");
    response
}

fn confirmation_text(order_id: i64, lines: &[OrderLine], total: rust_decimal::Decimal) -> String {
    let mut confirmation = format!("Order #{order_id} has been placed successfully!\n\nOrder Details:\n");
    for line in lines {
        confirmation.push_str(&format!(
            "• {}x {} ({} each)\n",
            line.quantity,
            line.name,
            inr(line.unit_price)
        ));
        if let Some(note) = &line.special_instructions {
            confirmation.push_str(&format!("  Note: {note}\n"));
        }
    }
    confirmation.push_str(&format!(
        "\nTotal Amount: {}\n\nThank you for your order! Your food will be prepared shortly.\n\
         Your order ID is: #{order_id} (please save this for reference)",
        inr(total)
    ));
    confirmation
}
