//! Two-click move gestures.

use crate::protocol::MoveRequest;
use crate::square::Square;
use tracing::{debug, instrument};

/// What a click amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// First click: the square is now the pending source.
    SourceSelected(Square),
    /// Second click: source and destination form a move to submit.
    MoveComposed(MoveRequest),
}

/// Holds at most one pending source square.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GestureTracker {
    pending: Option<Square>,
}

impl GestureTracker {
    /// Creates an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// The pending source square, if a first click has been made.
    pub fn pending(&self) -> Option<Square> {
        self.pending
    }

    /// Feeds one click into the tracker.
    ///
    /// With nothing pending, records the square. Otherwise takes the pending
    /// source, leaving the tracker idle, and composes a move. Clicking the
    /// same square twice composes a move to itself.
    #[instrument(skip(self), fields(square = %square, pending = ?self.pending))]
    pub fn on_square_clicked(&mut self, square: Square) -> Gesture {
        match self.pending.take() {
            None => {
                debug!("Source selected");
                self.pending = Some(square);
                Gesture::SourceSelected(square)
            }
            Some(source) => {
                debug!(source = %source, destination = %square, "Move composed");
                Gesture::MoveComposed(MoveRequest::new(source, square))
            }
        }
    }

    /// Drops any pending selection, returning it.
    pub fn clear(&mut self) -> Option<Square> {
        self.pending.take()
    }
}
