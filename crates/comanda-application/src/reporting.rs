//! Plain-text rendering of the read-only sales reports.

use comanda_core::order::{DailySales, ItemSales, inr};

/// Renders the best-sellers report, one ranked line per item.
pub fn render_best_sellers(rows: &[ItemSales]) -> String {
    if rows.is_empty() {
        return "No orders yet.".to_string();
    }
    let mut report = String::from("Best-selling items:\n");
    for (rank, row) in rows.iter().enumerate() {
        report.push_str(&format!(
            "{}. {} - {} sold - {} revenue\n",
            rank + 1,
            row.item_name,
            row.total_quantity,
            inr(row.total_revenue)
        ));
    }
    report.trim_end().to_string()
}

/// Renders the daily sales report, newest day first.
pub fn render_daily_sales(rows: &[DailySales]) -> String {
    if rows.is_empty() {
        return "No orders yet.".to_string();
    }
    let mut report = String::from("Daily sales:\n");
    for row in rows {
        report.push_str(&format!(
            "{}  orders: {}  revenue: {}\n",
            row.date, row.total_orders,
            inr(row.total_revenue)
        ));
    }
    report.trim_end().to_string()
}
