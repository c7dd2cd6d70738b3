//! Interactive chat loop against the ordering assistant.

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use comanda_application::OrderSession;
use comanda_infrastructure::{EmbeddingIndex, Settings, SqliteOrderRepository, load_menu};
use comanda_interaction::{DEFAULT_GROQ_MODEL, GroqApiAgent};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

pub async fn run(settings: &Settings) -> Result<()> {
    let catalog = Arc::new(load_menu(settings.menu_path())?);
    let retriever = Arc::new(EmbeddingIndex::from_catalog(&catalog));
    let model = settings.model.as_deref().unwrap_or(DEFAULT_GROQ_MODEL);
    let agent = Arc::new(GroqApiAgent::new(settings.api_key()?, model));
    let orders = Arc::new(SqliteOrderRepository::connect(settings.database_url()).await?);

    let mut session = OrderSession::new(catalog, retriever, agent, orders);
    println!("{}", session.welcome_message());
    println!("{}", "Type 'quit' to leave.".dimmed());

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
                    break;
                }
                let _ = editor.add_history_entry(line);
                let reply = session.process_turn(line).await;
                println!("{} {}", "assistant>".green().bold(), reply);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    println!("Thank you for visiting!");
    Ok(())
}
