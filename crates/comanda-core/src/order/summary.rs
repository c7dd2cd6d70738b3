//! Human-readable rendering of the running order.
//!
//! The itemized format is a stable surface: golden-output tests re-parse it,
//! so any change to the line shape is a breaking change.

use super::{OrderLine, inr};

/// The two-option prompt appended once the draft holds at least one line.
pub const NEXT_STEPS_PROMPT: &str = "Would you like to:\n\
    1. Add more items to your order\n\
    2. Type 'place order' to confirm and complete your order";

/// Renders the itemized summary and grand total for the given lines.
///
/// Deterministic: identical lines always produce identical text. Each line
/// renders as `- {qty}x {name} (₹{unit} each) = ₹{line total}`, followed by
/// an indented special-instructions line when present.
pub fn render_summary(lines: &[OrderLine]) -> String {
    let mut summary = String::from("Here's your order summary:\n");
    for line in lines {
        summary.push_str(&format!(
            "- {}x {} ({} each) = {}\n",
            line.quantity,
            line.name,
            inr(line.unit_price),
            inr(line.line_total()),
        ));
        if let Some(instructions) = &line.special_instructions {
            summary.push_str(&format!("  Special instructions: {}\n", instructions));
        }
    }
    summary.push_str(&format!("\nTotal: {}", inr(lines.iter().map(OrderLine::line_total).sum())));
    summary
}
