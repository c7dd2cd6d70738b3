use anyhow::Result;
use clap::{Parser, Subcommand};
use comanda_infrastructure::Settings;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "comanda")]
#[command(about = "Comanda - conversational order-taking assistant", long_about = None)]
struct Cli {
    /// Path to the menu JSON document (overrides settings)
    #[arg(long, global = true)]
    menu: Option<String>,

    /// SQLite database URL (overrides settings)
    #[arg(long, global = true)]
    db: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Talk to the ordering assistant
    Chat,
    /// Read-only sales reports
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },
}

#[derive(Subcommand)]
enum ReportAction {
    /// Best-selling items by quantity
    BestSellers,
    /// Per-day order count and revenue
    DailySales,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::load()?;
    if let Some(menu) = cli.menu {
        settings.menu_path = Some(menu);
    }
    if let Some(db) = cli.db {
        settings.database_url = Some(db);
    }

    match cli.command {
        Commands::Chat => commands::chat::run(&settings).await?,
        Commands::Report { action } => match action {
            ReportAction::BestSellers => commands::report::best_sellers(&settings).await?,
            ReportAction::DailySales => commands::report::daily_sales(&settings).await?,
        },
    }

    Ok(())
}
