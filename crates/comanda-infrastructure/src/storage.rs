//! SQLite-backed order persistence.
//!
//! One `orders` row per placed order (lines serialized as JSON, decimal
//! total as text) plus flattened `order_items` rows feeding the aggregate
//! reporting queries. Prices are stored as decimal strings; casting to REAL
//! happens only inside aggregate queries, never on the money shown for a
//! single order.

use async_trait::async_trait;
use chrono::Utc;
use comanda_core::error::{ComandaError, Result};
use comanda_core::order::{DailySales, ItemSales, OrderLine, OrderRepository};
use rust_decimal::Decimal;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;

/// Order repository over a SQLite database.
pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    /// Opens (creating if needed) the database at `url` and ensures the
    /// schema exists.
    ///
    /// The pool is capped at one connection: the session model is one
    /// conversation per process, and SQLite in-memory databases require a
    /// single connection to stay coherent.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|err| ComandaError::storage(format!("invalid database url {url}: {err}")))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(storage_err)?;

        let repository = Self { pool };
        repository.ensure_schema().await?;
        tracing::info!(url, "order database ready");
        Ok(repository)
    }

    /// Opens a fresh in-memory database (used by tests).
    pub async fn in_memory() -> Result<Self> {
        Self::connect("sqlite::memory:").await
    }

    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS orders (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                items TEXT NOT NULL,
                total_price TEXT NOT NULL,
                placed_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(storage_err)?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS order_items (
                order_id INTEGER NOT NULL REFERENCES orders(id),
                item_name TEXT NOT NULL,
                quantity INTEGER NOT NULL,
                unit_price TEXT NOT NULL,
                line_total TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(storage_err)?;

        Ok(())
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn save_order(&self, lines: &[OrderLine], total: Decimal) -> Result<i64> {
        if lines.is_empty() {
            return Err(ComandaError::storage("refusing to save an empty order"));
        }

        let items_json = serde_json::to_string(lines)?;
        let placed_at = Utc::now().to_rfc3339();

        let mut tx = self.pool.begin().await.map_err(storage_err)?;

        let order_id = sqlx::query(
            "INSERT INTO orders (items, total_price, placed_at) VALUES (?1, ?2, ?3)",
        )
        .bind(&items_json)
        .bind(total.to_string())
        .bind(&placed_at)
        .execute(&mut *tx)
        .await
        .map_err(storage_err)?
        .last_insert_rowid();

        for line in lines {
            sqlx::query(
                "INSERT INTO order_items (order_id, item_name, quantity, unit_price, line_total)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(order_id)
            .bind(&line.name)
            .bind(i64::from(line.quantity))
            .bind(line.unit_price.to_string())
            .bind(line.line_total().to_string())
            .execute(&mut *tx)
            .await
            .map_err(storage_err)?;
        }

        tx.commit().await.map_err(storage_err)?;
        tracing::info!(order_id, total = %total, lines = lines.len(), "order saved");
        Ok(order_id)
    }

    async fn best_selling_items(&self, limit: u32) -> Result<Vec<ItemSales>> {
        let rows = sqlx::query(
            "SELECT item_name,
                    SUM(quantity) AS total_quantity,
                    SUM(CAST(line_total AS REAL)) AS total_revenue
             FROM order_items
             GROUP BY item_name
             ORDER BY total_quantity DESC
             LIMIT ?1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(storage_err)?;

        Ok(rows
            .into_iter()
            .map(|row| ItemSales {
                item_name: row.get("item_name"),
                total_quantity: row.get("total_quantity"),
                total_revenue: decimal_from_real(row.get("total_revenue")),
            })
            .collect())
    }

    async fn daily_sales(&self, days: u32) -> Result<Vec<DailySales>> {
        let rows = sqlx::query(
            "SELECT substr(placed_at, 1, 10) AS day,
                    COUNT(*) AS total_orders,
                    SUM(CAST(total_price AS REAL)) AS total_revenue
             FROM orders
             GROUP BY day
             ORDER BY day DESC
             LIMIT ?1",
        )
        .bind(i64::from(days))
        .fetch_all(&self.pool)
        .await
        .map_err(storage_err)?;

        Ok(rows
            .into_iter()
            .map(|row| DailySales {
                date: row.get("day"),
                total_orders: row.get("total_orders"),
                total_revenue: decimal_from_real(row.get("total_revenue")),
            })
            .collect())
    }
}

fn storage_err(err: sqlx::Error) -> ComandaError {
    ComandaError::storage(err.to_string())
}

fn decimal_from_real(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or_default()
        .round_dp(2)
}
