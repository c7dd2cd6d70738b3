//! Storage port for placed orders.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::OrderLine;
use crate::error::Result;

/// Aggregate row: lifetime sales of one menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSales {
    pub item_name: String,
    pub total_quantity: i64,
    pub total_revenue: Decimal,
}

/// Aggregate row: one day of orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySales {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub total_orders: i64,
    pub total_revenue: Decimal,
}

/// Persistence collaborator for completed orders.
///
/// `save_order` must be atomic (all lines and the order row, or nothing)
/// and must assign unique, monotonically non-decreasing ids. The aggregate
/// queries are read-only and feed the reporting surface.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists the order and returns its assigned id.
    async fn save_order(&self, lines: &[OrderLine], total: Decimal) -> Result<i64>;

    /// Best-selling items by total quantity, descending.
    async fn best_selling_items(&self, limit: u32) -> Result<Vec<ItemSales>>;

    /// Per-day order count and revenue, newest day first.
    async fn daily_sales(&self, days: u32) -> Result<Vec<DailySales>>;
}
