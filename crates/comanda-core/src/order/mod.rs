//! The running order: lines accumulated across turns before placement.
//!
//! An [`OrderDraft`] is owned by exactly one conversation session. It is
//! created empty, appended to whenever the user orders items that resolve
//! against the catalog, and cleared only after a placement succeeds. A
//! failed placement leaves the draft untouched so the user can retry.

mod repository;
mod summary;

pub use repository::{DailySales, ItemSales, OrderRepository};
pub use summary::{NEXT_STEPS_PROMPT, render_summary};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::intent::RequestedItem;
use crate::menu::MenuCatalog;

/// Formats an amount in the restaurant's currency, two decimal places.
pub fn inr(amount: Decimal) -> String {
    format!("₹{:.2}", amount)
}

/// One priced line of an order.
///
/// The unit price is captured when the line is created and never re-looked
/// up, so a later menu change cannot silently reprice a pending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

impl OrderLine {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Outcome of folding requested items into the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddReport {
    /// Names of items that resolved against the catalog and were added.
    pub added: Vec<String>,
    /// Requested names with no catalog match, in request order.
    pub unmatched: Vec<String>,
}

impl AddReport {
    pub fn any_added(&self) -> bool {
        !self.added.is_empty()
    }
}

/// The order being built up across conversation turns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    lines: Vec<OrderLine>,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Grand total over all lines.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    /// Empties the draft. Called by the session once placement succeeded.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Resolves requested items against the catalog and appends the matches.
    ///
    /// Unmatched names never abort the call: matched items are still added
    /// and the misses are reported back so the session can tell the user.
    /// A zero quantity from the model is clamped to one.
    pub fn add_items(&mut self, catalog: &MenuCatalog, requested: &[RequestedItem]) -> AddReport {
        let mut report = AddReport::default();
        for item in requested {
            match catalog.get(&item.name) {
                Some(menu_item) => {
                    self.lines.push(OrderLine {
                        name: menu_item.name.clone(),
                        quantity: item.quantity.max(1),
                        unit_price: menu_item.price,
                        special_instructions: item.special_instructions.clone(),
                    });
                    report.added.push(menu_item.name.clone());
                }
                None => report.unmatched.push(item.name.clone()),
            }
        }
        report
    }
}
