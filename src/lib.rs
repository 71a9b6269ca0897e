//! Strictly Chess - click-to-move client for a server-authoritative chess game
//!
//! The server owns every rule: legality, turn order, scoring, game over.
//! This crate renders the board it is given, turns two clicks into a move
//! submission, and redraws from whatever the server answers.
//!
//! # Architecture
//!
//! - **Square**: typed square identifiers and the board coloring rule
//! - **Protocol**: JSON wire types, converted to typed outcomes on receipt
//! - **Api**: the server calls, behind the [`ChessApi`] trait
//! - **Board**: the 64-cell view model the server fills in
//! - **Tracker**: the single pending-selection slot
//! - **Client**: the controller tying clicks, server calls and notices together
//! - **Tui**: ratatui front end with mouse and keyboard input
//!
//! # Example
//!
//! ```no_run
//! use strictly_chess::{ChessClient, ClientConfig, HttpChessApi, NotificationQueue};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let api = HttpChessApi::new(ClientConfig::default());
//! let mut client = ChessClient::new(api, NotificationQueue::new());
//! client.start().await?;
//! client.on_square_clicked("e2".parse()?).await?;
//! client.on_square_clicked("e4".parse()?).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod board;
mod client;
mod config;
mod error;
mod notify;
mod protocol;
mod square;
mod tracker;

/// Terminal front end.
pub mod tui;

// Crate-level exports - Server access
pub use api::{ChessApi, HttpChessApi};

// Crate-level exports - Board model
pub use board::{Board, SEED_COLOR, SquareCell, UNKNOWN_PIECE, display_text};

// Crate-level exports - Controller
pub use client::ChessClient;

// Crate-level exports - Configuration
pub use config::{ClientConfig, ConfigError, SERVER_URL_ENV};

// Crate-level exports - Errors
pub use error::{ClientError, ClientErrorKind};

// Crate-level exports - Notifications
pub use notify::{GAME_OVER_MESSAGE, NotificationQueue, Notifier};

// Crate-level exports - Wire protocol
pub use protocol::{
    BoardResponse, BoardSnapshot, CODE_ACCEPTED, CODE_REJECTED, MoveOutcome, MoveRequest,
    MoveStatus, RawMoveResponse, RawMoveStatus, ScoreResponse,
};

// Crate-level exports - Squares
pub use square::{File, Rank, Square, SquareColor, square_colors};

// Crate-level exports - Gestures
pub use tracker::{Gesture, GestureTracker};
