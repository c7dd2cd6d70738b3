//! Read-only sales reports over the order history.

use anyhow::Result;
use comanda_application::reporting;
use comanda_core::order::OrderRepository;
use comanda_infrastructure::{Settings, SqliteOrderRepository};

const BEST_SELLER_LIMIT: u32 = 5;
const DAILY_SALES_DAYS: u32 = 30;

pub async fn best_sellers(settings: &Settings) -> Result<()> {
    let repository = SqliteOrderRepository::connect(settings.database_url()).await?;
    let rows = repository.best_selling_items(BEST_SELLER_LIMIT).await?;
    println!("{}", reporting::render_best_sellers(&rows));
    Ok(())
}

pub async fn daily_sales(settings: &Settings) -> Result<()> {
    let repository = SqliteOrderRepository::connect(settings.database_url()).await?;
    let rows = repository.daily_sales(DAILY_SALES_DAYS).await?;
    println!("{}", reporting::render_daily_sales(&rows));
    Ok(())
}
