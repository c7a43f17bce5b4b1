//! Contact Book - Main entry point
//!
//! Starts an interactive session on stdin/stdout. Logs go to stderr so they
//! never mix with the conversation.

use anyhow::Result;
use contact_book::console::run_session;
use contact_book::{Config, Dispatcher, RecordRepository};
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Configuration decides the default log level, so it is loaded first
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let mut dispatcher = Dispatcher::new();

    info!("Starting contact book session");
    if let Err(e) = run_session(
        &mut dispatcher,
        BufReader::new(stdin()),
        stdout(),
        &config.prompt,
    )
    .await
    {
        error!("Session ended with I/O error: {}", e);
        return Err(e.into());
    }

    info!(
        "Contact book session finished with {} contact(s)",
        dispatcher.repository().len()
    );
    Ok(())
}
