//! Keyboard cursor and mouse hit-testing.

use crate::square::{File, Rank, Square};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

use super::ui::BoardLayout;

/// Moves the cursor one square in the arrow's direction, stopping at the
/// board edge.
pub fn move_cursor(cursor: Square, key: KeyCode) -> Square {
    let file = cursor.file().index();
    let rank = cursor.rank().number();

    let (file, rank) = match key {
        KeyCode::Left => (file.saturating_sub(1), rank),
        KeyCode::Right => ((file + 1).min(7), rank),
        KeyCode::Up => (file, (rank + 1).min(8)),
        KeyCode::Down => (file, rank.saturating_sub(1).max(1)),
        _ => return cursor,
    };

    match (File::from_index(file), Rank::from_number(rank)) {
        (Some(file), Some(rank)) => Square::new(file, rank),
        _ => cursor,
    }
}

/// The square a mouse event clicks, if it is a left press on the board.
pub fn clicked_square(layout: &BoardLayout, event: &MouseEvent) -> Option<Square> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => layout.square_at(event.column, event.row),
        _ => None,
    }
}
