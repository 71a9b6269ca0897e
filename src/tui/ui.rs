//! Stateless UI rendering for the chess board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::board::{Board, SquareCell, display_text};
use crate::square::{File, Rank, Square, SquareColor};
use strum::IntoEnumIterator;

/// Terminal columns per board square.
pub const CELL_WIDTH: u16 = 5;

/// Terminal rows per board square.
pub const CELL_HEIGHT: u16 = 2;

const LABEL_WIDTH: u16 = 2;
const GRID_WIDTH: u16 = CELL_WIDTH * 8;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 8;

/// Where the 8×8 grid sits on screen.
///
/// Shared by drawing and mouse hit-testing so a press lands on the square
/// that was drawn there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    grid: Rect,
}

impl BoardLayout {
    /// Layout of the grid for a full terminal area.
    pub fn for_screen(area: Rect) -> Self {
        let [_, board_area, _] = screen_chunks(area);
        let framed = center_rect(board_area, LABEL_WIDTH + GRID_WIDTH, GRID_HEIGHT + 1);
        let grid = Rect::new(
            framed.x + LABEL_WIDTH,
            framed.y,
            GRID_WIDTH.min(framed.width.saturating_sub(LABEL_WIDTH)),
            GRID_HEIGHT.min(framed.height),
        );
        Self { grid }
    }

    /// The rectangle covered by the 64 squares.
    pub fn grid(&self) -> Rect {
        self.grid
    }

    /// The square under terminal cell (`column`, `row`), if any.
    ///
    /// Only presses inside a drawn square count as clicks on the board.
    pub fn square_at(&self, column: u16, row: u16) -> Option<Square> {
        let g = self.grid;
        if !self.fits()
            || column < g.x
            || row < g.y
            || column >= g.x + g.width
            || row >= g.y + g.height
        {
            return None;
        }
        let file = ((column - g.x) / CELL_WIDTH) as usize;
        let rank_row = ((row - g.y) / CELL_HEIGHT) as usize;
        if file >= 8 || rank_row >= 8 {
            return None;
        }
        Square::from_view_index(rank_row * 8 + file)
    }

    /// The screen rectangle of `square`.
    pub fn cell_rect(&self, square: Square) -> Rect {
        let index = square.view_index() as u16;
        Rect::new(
            self.grid.x + (index % 8) * CELL_WIDTH,
            self.grid.y + (index / 8) * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
    }

    /// Whether the terminal was large enough to draw the whole grid.
    pub fn fits(&self) -> bool {
        self.grid.width == GRID_WIDTH && self.grid.height == GRID_HEIGHT
    }
}

/// Renders the title, board, status line and any pending notice.
pub fn draw(frame: &mut Frame, board: &Board, cursor: Square, status: &str, notice: Option<&str>) {
    let area = frame.area();
    let [title_area, board_area, status_area] = screen_chunks(area);

    let title = Paragraph::new("Strictly Chess")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let layout = BoardLayout::for_screen(area);
    if layout.fits() {
        draw_board(frame, &layout, board, cursor);
    } else {
        let warning = Paragraph::new("Terminal too small")
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(warning, board_area);
    }

    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("arrows/click: move  s: score  r: reset  q: quit"),
        );
    frame.render_widget(status_text, status_area);

    if let Some(message) = notice {
        draw_notice(frame, area, message);
    }
}

fn screen_chunks(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(GRID_HEIGHT + 1), // Board
            Constraint::Length(3),            // Status
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

fn draw_board(frame: &mut Frame, layout: &BoardLayout, board: &Board, cursor: Square) {
    for cell in board.cells() {
        draw_cell(frame, layout.cell_rect(*cell.id()), cell, *cell.id() == cursor);
    }

    let grid = layout.grid();
    for (row, rank) in Rank::iter().rev().enumerate() {
        let label = Paragraph::new(rank.to_string()).style(Style::default().fg(Color::DarkGray));
        let y = grid.y + row as u16 * CELL_HEIGHT;
        frame.render_widget(label, Rect::new(grid.x - LABEL_WIDTH, y, 1, 1));
    }
    for (col, file) in File::iter().enumerate() {
        let label = Paragraph::new(file.to_string())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        let x = grid.x + col as u16 * CELL_WIDTH;
        frame.render_widget(label, Rect::new(x, grid.y + GRID_HEIGHT, CELL_WIDTH, 1));
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &SquareCell, is_cursor: bool) {
    let background = if *cell.highlighted() {
        Color::Yellow
    } else {
        match cell.color() {
            SquareColor::White => Color::Gray,
            SquareColor::Black => Color::DarkGray,
        }
    };

    let mut style = Style::default().bg(background).fg(Color::Black);
    if is_cursor {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }

    let text = display_text(cell.content());
    let label = if is_cursor && text.is_empty() {
        "·".to_string()
    } else {
        text
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(label, style)))
        .style(Style::default().bg(background))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_notice(frame: &mut Frame, area: Rect, message: &str) {
    let popup = center_rect(area, 44, 7);
    frame.render_widget(Clear, popup);
    let text = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Notice").borders(Borders::ALL));
    frame.render_widget(paragraph, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
