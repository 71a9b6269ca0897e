//! Strictly Chess - terminal client
//!
//! Plays against a chess server that owns all of the rules.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_chess::{
    Board, ChessApi, ChessClient, ClientConfig, HttpChessApi, NotificationQueue, tui,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Command::Play => run_play(config).await,
        Command::Board => run_board(config).await,
        Command::Score => run_score(config).await,
    }
}

/// Reads the config file, then applies the environment and CLI overrides.
fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = ClientConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?
        .apply_env();
    if let Some(url) = &cli.server_url {
        config = config.with_server_url(url.clone());
    }
    Ok(config)
}

/// Run the terminal client
async fn run_play(config: ClientConfig) -> Result<()> {
    // Log to a file so tracing output does not tear the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(server_url = %config.server_url(), "Connecting to chess server");
    let client = ChessClient::new(HttpChessApi::new(config), NotificationQueue::new());
    tui::run_tui(client).await
}

/// Print the board
#[instrument(skip(config), fields(server_url = %config.server_url()))]
async fn run_board(config: ClientConfig) -> Result<()> {
    initialize_stderr_tracing();

    let api = HttpChessApi::new(config);
    let snapshot = api.fetch_board().await.context("Failed to fetch board")?;
    let mut board = Board::initialize();
    board.render(&snapshot);
    println!("{}", board.to_text());
    Ok(())
}

/// Print the score
#[instrument(skip(config), fields(server_url = %config.server_url()))]
async fn run_score(config: ClientConfig) -> Result<()> {
    initialize_stderr_tracing();

    let api = HttpChessApi::new(config);
    let score = api.fetch_score().await.context("Failed to fetch score")?;
    println!("{}", score);
    Ok(())
}

fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
