//! The click-to-move controller.

use crate::api::ChessApi;
use crate::board::Board;
use crate::error::ClientError;
use crate::notify::{GAME_OVER_MESSAGE, Notifier};
use crate::protocol::{MoveOutcome, MoveRequest};
use crate::square::Square;
use crate::tracker::{Gesture, GestureTracker};
use tracing::{debug, error, info, instrument, warn};

/// Owns the board, the pending selection and the server handle, and turns
/// clicks into server calls.
#[derive(Debug)]
pub struct ChessClient<A, N> {
    api: A,
    notifier: N,
    board: Board,
    tracker: GestureTracker,
    status_message: String,
}

impl<A: ChessApi, N: Notifier> ChessClient<A, N> {
    /// Creates a client with a freshly initialized, empty board.
    #[instrument(skip_all)]
    pub fn new(api: A, notifier: N) -> Self {
        info!("Creating chess client");
        Self {
            api,
            notifier,
            board: Board::initialize(),
            tracker: GestureTracker::new(),
            status_message: "Connecting...".to_string(),
        }
    }

    /// The board as currently displayed.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The pending source square, if any.
    pub fn pending(&self) -> Option<Square> {
        self.tracker.pending()
    }

    /// The notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Mutable access to the notifier.
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// The server handle.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// One-line summary of the last thing that happened.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Records a status line, e.g. a transport failure seen by the caller.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Fetches the saved board and renders it.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<(), ClientError> {
        info!("Loading saved board");
        let snapshot = self.api.fetch_board().await?;
        self.board.render(&snapshot);
        self.status_message = "Select a piece to move.".to_string();
        Ok(())
    }

    /// Handles a click on `square`.
    ///
    /// The first click only records and highlights the square. The second
    /// click clears the highlight and selection, then submits exactly one
    /// move; the selection is already cleared when the submission runs, so
    /// the client is idle afterward whether the server accepts, rejects or
    /// cannot be reached. Returns the server's verdict for a submitted move.
    #[instrument(skip(self), fields(square = %square))]
    pub async fn on_square_clicked(
        &mut self,
        square: Square,
    ) -> Result<Option<MoveOutcome>, ClientError> {
        match self.tracker.on_square_clicked(square) {
            Gesture::SourceSelected(source) => {
                self.board.set_highlight(source);
                self.status_message = format!("Selected {}. Choose a destination.", source);
                Ok(None)
            }
            Gesture::MoveComposed(request) => {
                self.board.clear_highlight(request.target);
                self.submit_move(request.target, request.destination)
                    .await
                    .map(Some)
            }
        }
    }

    /// Posts a move and applies the server's answer.
    ///
    /// A rejection is shown to the user and leaves the board alone. An
    /// acceptance re-fetches and renders the board, then runs the game-over
    /// check. Any failure is written to the status line.
    #[instrument(skip(self), fields(source = %source, destination = %destination))]
    pub async fn submit_move(
        &mut self,
        source: Square,
        destination: Square,
    ) -> Result<MoveOutcome, ClientError> {
        let outcome = match self.api.submit_move(MoveRequest::new(source, destination)).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "Move submission failed");
                self.status_message = format!("Move {}-{} failed: {}", source, destination, e.kind());
                return Err(e);
            }
        };

        match &outcome {
            MoveOutcome::Rejected { message } => {
                warn!(message = %message, "Move rejected");
                self.status_message = format!("Move {}-{} rejected.", source, destination);
                self.notifier.notify(message);
            }
            MoveOutcome::Accepted => {
                info!("Move accepted, refreshing board");
                if let Err(e) = self.apply_accepted(source, destination).await {
                    error!(error = %e, "Refresh after accepted move failed");
                    self.status_message = format!(
                        "Move {}-{} accepted, refresh failed: {}",
                        source,
                        destination,
                        e.kind()
                    );
                    return Err(e);
                }
            }
            MoveOutcome::Unrecognized(code) => {
                warn!(code = %code, "Unrecognized move status code, ignoring");
            }
        }
        Ok(outcome)
    }

    /// Renders the post-move position, then resets over it if the game ended.
    async fn apply_accepted(
        &mut self,
        source: Square,
        destination: Square,
    ) -> Result<(), ClientError> {
        let status = self.api.fetch_move_status().await?;
        self.board.render(status.board());
        self.status_message = format!("Moved {}-{}.", source, destination);
        self.check_game_over(*status.game_over()).await?;
        Ok(())
    }

    /// Notifies the user and resets the board when `game_over` is set.
    ///
    /// Returns whether a reset happened.
    #[instrument(skip(self))]
    pub async fn check_game_over(&mut self, game_over: bool) -> Result<bool, ClientError> {
        if !game_over {
            return Ok(false);
        }
        info!("Game over reported by server");
        self.notifier.notify(GAME_OVER_MESSAGE);
        self.reset_board().await?;
        Ok(true)
    }

    /// Re-fetches the board from the server, dropping any pending selection.
    #[instrument(skip(self))]
    pub async fn reset_board(&mut self) -> Result<(), ClientError> {
        if let Some(square) = self.tracker.clear() {
            debug!(square = %square, "Dropping pending selection");
        }
        self.board.clear_all_highlights();
        let snapshot = self.api.fetch_board().await?;
        self.board.render(&snapshot);
        self.status_message = "Board reset.".to_string();
        Ok(())
    }

    /// Fetches the score and shows it to the user.
    #[instrument(skip(self))]
    pub async fn show_score(&mut self) -> Result<(), ClientError> {
        let score = self.api.fetch_score().await?;
        info!(%score, "Showing score");
        self.notifier.notify(&score.to_string());
        Ok(())
    }
}
