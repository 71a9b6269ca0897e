//! Command-line interface for strictly_chess.

use clap::{Parser, Subcommand};

/// Strictly Chess - click-to-move client for a chess server
#[derive(Parser, Debug)]
#[command(name = "strictly_chess")]
#[command(about = "Click-to-move terminal client for a chess server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the client configuration file
    #[arg(short, long, default_value = "strictly_chess.toml")]
    pub config: std::path::PathBuf,

    /// Chess server URL, overrides the config file and environment
    #[arg(long)]
    pub server_url: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Print the current board and exit
    Board,

    /// Print the current score and exit
    Score,
}
