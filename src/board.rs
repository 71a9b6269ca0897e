//! Board model: the 64 cells the user clicks on and the server fills in.

use crate::protocol::BoardSnapshot;
use crate::square::{Square, SquareColor, square_colors};
use derive_getters::Getters;
use tracing::{debug, instrument, warn};

/// Color of the first cell; the coloring rule carries it from there.
pub const SEED_COLOR: SquareColor = SquareColor::Black;

/// One board cell.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SquareCell {
    /// Identifier, unique per board.
    id: Square,
    /// Color classification.
    color: SquareColor,
    /// Server-supplied display content.
    content: String,
    /// Whether the cell is the pending move source.
    highlighted: bool,
}

/// The board container: 64 cells in view order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<SquareCell>,
}

impl Board {
    /// Builds the 64 cells, rank 8 to rank 1 and file a to h, colored from
    /// [`SEED_COLOR`], each empty and unhighlighted.
    #[instrument]
    pub fn initialize() -> Self {
        let colors = square_colors(SEED_COLOR);
        let cells: Vec<SquareCell> = Square::all()
            .zip(colors)
            .map(|(id, color)| SquareCell {
                id,
                color,
                content: String::new(),
                highlighted: false,
            })
            .collect();
        debug!(cells = cells.len(), "Board initialized");
        Self { cells }
    }

    /// Cells in the order they were created.
    pub fn cells(&self) -> &[SquareCell] {
        &self.cells
    }

    /// Looks up a cell by identifier.
    pub fn cell(&self, square: Square) -> &SquareCell {
        &self.cells[square.view_index()]
    }

    fn cell_mut(&mut self, square: Square) -> &mut SquareCell {
        &mut self.cells[square.view_index()]
    }

    /// Overwrites the content of every square listed in `snapshot`.
    ///
    /// Order of the snapshot does not matter. Squares the snapshot omits are
    /// left as they were.
    #[instrument(skip_all, fields(entries = snapshot.len()))]
    pub fn render(&mut self, snapshot: &BoardSnapshot) {
        for (square, content) in snapshot {
            self.cell_mut(*square).content = content.clone();
        }
        if snapshot.len() != self.cells.len() {
            warn!(entries = snapshot.len(), "Snapshot does not cover every square");
        }
        debug!("Board rendered");
    }

    /// Marks `square` as the pending source.
    pub fn set_highlight(&mut self, square: Square) {
        self.cell_mut(square).highlighted = true;
    }

    /// Removes the highlight from `square`.
    pub fn clear_highlight(&mut self, square: Square) {
        self.cell_mut(square).highlighted = false;
    }

    /// Removes every highlight.
    pub fn clear_all_highlights(&mut self) {
        for cell in &mut self.cells {
            cell.highlighted = false;
        }
    }

    /// The currently highlighted square, if any.
    pub fn highlighted(&self) -> Option<Square> {
        self.cells.iter().find(|c| c.highlighted).map(|c| c.id)
    }

    /// Plain-text rendering, rank 8 at the top, `.` for empty squares.
    pub fn to_text(&self) -> String {
        let mut result = String::new();
        for (row, rank_cells) in self.cells.chunks(8).enumerate() {
            result.push_str(&format!("{} ", 8 - row));
            for cell in rank_cells {
                let text = display_text(&cell.content);
                if text.is_empty() {
                    result.push_str(" .");
                } else {
                    result.push(' ');
                    result.push_str(&text);
                }
            }
            result.push('\n');
        }
        result.push_str("   a b c d e f g h");
        result
    }

    /// Current contents of every cell as a snapshot.
    pub fn snapshot(&self) -> BoardSnapshot {
        self.cells
            .iter()
            .map(|c| (c.id, c.content.clone()))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initialize()
    }
}

/// Text to draw for a server-supplied cell content.
///
/// HTML markup is stripped; well-known piece names (`KING_WHITE`,
/// `pawn_black`, single letters `K`/`p`, ...) become Unicode glyphs;
/// anything else is returned unchanged.
///
/// Markup with no text, such as `<img class="piece" src="king_white.png">`,
/// is searched for a piece name in its attributes. A `piece` element whose
/// name is not recognised is drawn as [`UNKNOWN_PIECE`].
pub fn display_text(content: &str) -> String {
    let stripped = strip_markup(content);
    let trimmed = stripped.trim();
    if trimmed.is_empty() && content.contains('<') {
        return markup_piece(content);
    }
    match piece_glyph(trimmed) {
        Some(glyph) => glyph.to_string(),
        None => trimmed.to_string(),
    }
}

/// Glyph for a piece element whose name could not be read.
pub const UNKNOWN_PIECE: char = '●';

fn markup_piece(content: &str) -> String {
    let tokens = content
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|t| t.len() > 1);
    let mut is_piece = false;
    for token in tokens {
        if let Some(glyph) = piece_glyph(token) {
            return glyph.to_string();
        }
        is_piece |= token.eq_ignore_ascii_case("piece");
    }
    if is_piece {
        debug!(content, "Unreadable piece markup");
        UNKNOWN_PIECE.to_string()
    } else {
        String::new()
    }
}

fn strip_markup(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut in_tag = false;
    for c in content.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

fn piece_glyph(name: &str) -> Option<char> {
    if let [letter] = name.as_bytes() {
        return letter_glyph(*letter as char);
    }
    let upper = name.to_ascii_uppercase();
    let (piece, color) = upper.split_once('_')?;
    let white = match color {
        "WHITE" => true,
        "BLACK" => false,
        _ => return None,
    };
    let glyph = match (piece, white) {
        ("KING", true) => '♔',
        ("QUEEN", true) => '♕',
        ("ROOK", true) => '♖',
        ("BISHOP", true) => '♗',
        ("KNIGHT", true) => '♘',
        ("PAWN", true) => '♙',
        ("KING", false) => '♚',
        ("QUEEN", false) => '♛',
        ("ROOK", false) => '♜',
        ("BISHOP", false) => '♝',
        ("KNIGHT", false) => '♞',
        ("PAWN", false) => '♟',
        _ => return None,
    };
    Some(glyph)
}

fn letter_glyph(letter: char) -> Option<char> {
    let glyph = match letter {
        'K' => '♔',
        'Q' => '♕',
        'R' => '♖',
        'B' => '♗',
        'N' => '♘',
        'P' => '♙',
        'k' => '♚',
        'q' => '♛',
        'r' => '♜',
        'b' => '♝',
        'n' => '♞',
        'p' => '♟',
        _ => return None,
    };
    Some(glyph)
}
