//! Wire types for the chess server's JSON endpoints.
//!
//! The server reports move results with string status codes and a
//! string-typed game-over flag. Those quirks stay in this module: the raw
//! envelopes are converted into [`MoveOutcome`] and [`MoveStatus`] right
//! after decoding, and nothing else in the crate sees the strings.

use crate::square::Square;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Application status code for an accepted move.
pub const CODE_ACCEPTED: &str = "200";

/// Application status code for a rejected move.
pub const CODE_REJECTED: &str = "400";

/// Full board contents as sent by the server: square to display text.
pub type BoardSnapshot = BTreeMap<Square, String>;

/// Decodes a snapshot, reading a `null` square as empty.
fn nullable_snapshot<'de, D>(deserializer: D) -> Result<BoardSnapshot, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<Square, Option<String>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(square, content)| (square, content.unwrap_or_default()))
        .collect())
}

/// Response of `GET /board`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    /// Current board contents.
    #[serde(deserialize_with = "nullable_snapshot")]
    pub board_info: BoardSnapshot,
}

/// Body of `POST /move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveRequest {
    /// Source square.
    pub target: Square,
    /// Destination square.
    pub destination: Square,
}

/// Raw response of `POST /move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMoveResponse {
    /// Application status code, `"200"` or `"400"`.
    pub code: String,
    /// Human-readable message, present on rejection.
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of a move submission as decided by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The server applied the move.
    Accepted,
    /// The server refused the move.
    Rejected {
        /// Explanation to show the user.
        message: String,
    },
    /// A status code this client does not know.
    Unrecognized(String),
}

impl RawMoveResponse {
    /// Converts the string status code into a [`MoveOutcome`].
    #[instrument(skip(self), fields(code = %self.code))]
    pub fn into_outcome(self) -> MoveOutcome {
        let outcome = match self.code.as_str() {
            CODE_ACCEPTED => MoveOutcome::Accepted,
            CODE_REJECTED => MoveOutcome::Rejected {
                message: self.message.unwrap_or_default(),
            },
            _ => MoveOutcome::Unrecognized(self.code),
        };
        debug!(?outcome, "Decoded move outcome");
        outcome
    }
}

/// Raw response of `GET /move`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMoveStatus {
    /// Board contents after the move.
    #[serde(deserialize_with = "nullable_snapshot")]
    pub board_info: BoardSnapshot,
    /// Game-over marker; only the string `"true"` means the game ended.
    #[serde(default)]
    pub game_over_flag: serde_json::Value,
}

/// Board state after a move, with the game-over flag as a real boolean.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct MoveStatus {
    board: BoardSnapshot,
    game_over: bool,
}

impl MoveStatus {
    /// Creates a move status.
    pub fn new(board: BoardSnapshot, game_over: bool) -> Self {
        Self { board, game_over }
    }

    /// Consumes the status, returning the snapshot.
    pub fn into_board(self) -> BoardSnapshot {
        self.board
    }
}

impl RawMoveStatus {
    /// Converts the wire flag into a boolean.
    ///
    /// Matches the server's existing format exactly: the JSON string
    /// `"true"` is the only game-over value. A JSON boolean `true` is not.
    #[instrument(skip(self))]
    pub fn into_status(self) -> MoveStatus {
        let game_over = self.game_over_flag.as_str() == Some("true");
        debug!(flag = %self.game_over_flag, game_over, "Decoded game-over flag");
        MoveStatus::new(self.board_info, game_over)
    }
}

/// Response of `GET /score`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    /// White's material score.
    pub white_score: f64,
    /// Black's material score.
    pub black_score: f64,
}

impl std::fmt::Display for ScoreResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "White: {}  Black: {}", self.white_score, self.black_score)
    }
}
