//! Terminal front end for the chess client.

mod input;
mod ui;

pub use input::{clicked_square, move_cursor};
pub use ui::{BoardLayout, CELL_HEIGHT, CELL_WIDTH, draw};

use crate::api::ChessApi;
use crate::client::ChessClient;
use crate::notify::NotificationQueue;
use crate::square::{File, Rank, Square};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Keep handling events.
    Continue,
    /// Leave the terminal client.
    Quit,
}

/// Terminal session state: the client plus the keyboard cursor.
#[derive(Debug)]
pub struct TerminalApp<A> {
    client: ChessClient<A, NotificationQueue>,
    cursor: Square,
}

impl<A: ChessApi> TerminalApp<A> {
    /// Wraps a client; the cursor starts on e2.
    pub fn new(client: ChessClient<A, NotificationQueue>) -> Self {
        Self {
            client,
            cursor: Square::new(File::E, Rank::Two),
        }
    }

    /// The wrapped client.
    pub fn client(&self) -> &ChessClient<A, NotificationQueue> {
        &self.client
    }

    /// The keyboard cursor.
    pub fn cursor(&self) -> Square {
        self.cursor
    }

    /// Loads the saved board, recording a failure in the status line.
    #[instrument(skip(self))]
    pub async fn start(&mut self) {
        if let Err(e) = self.client.start().await {
            error!(error = %e, "Failed to load board");
            self.client
                .set_status(format!("Could not load board: {}", e.kind()));
        }
    }

    /// Draws the current state.
    pub fn draw(&self, frame: &mut ratatui::Frame) {
        draw(
            frame,
            self.client.board(),
            self.cursor,
            self.client.status_message(),
            self.client.notifier().front(),
        );
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub async fn handle_key(&mut self, key: KeyEvent) -> LoopControl {
        if key.kind != KeyEventKind::Press {
            return LoopControl::Continue;
        }

        if self.client.notifier_mut().pop_front().is_some() {
            debug!("Notice dismissed");
            return LoopControl::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return LoopControl::Quit;
            }
            KeyCode::Char('s') => {
                if let Err(e) = self.client.show_score().await {
                    warn!(error = %e, "Score request failed");
                    self.client
                        .set_status(format!("Could not load score: {}", e.kind()));
                }
            }
            KeyCode::Char('r') => {
                info!("User requested reset");
                if let Err(e) = self.client.reset_board().await {
                    warn!(error = %e, "Reset failed");
                    self.client
                        .set_status(format!("Could not reset board: {}", e.kind()));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor).await,
            code => self.cursor = move_cursor(self.cursor, code),
        }
        LoopControl::Continue
    }

    /// Handles a mouse event against the layout of a screen of size `area`.
    #[instrument(skip(self, event), fields(column = event.column, row = event.row))]
    pub async fn handle_mouse(&mut self, area: Rect, event: MouseEvent) {
        let Some(square) = clicked_square(&BoardLayout::for_screen(area), &event) else {
            return;
        };
        if self.client.notifier_mut().pop_front().is_some() {
            debug!("Notice dismissed by click");
            return;
        }
        self.cursor = square;
        self.click(square).await;
    }

    async fn click(&mut self, square: Square) {
        match self.client.on_square_clicked(square).await {
            Ok(outcome) => debug!(?outcome, "Click handled"),
            // The tracker is already idle.
            Err(e) => warn!(error = %e, "Click failed"),
        }
    }
}

/// Runs the terminal client until the user quits.
pub async fn run_tui<A: ChessApi>(client: ChessClient<A, NotificationQueue>) -> Result<()> {
    info!("Starting Strictly Chess TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = TerminalApp::new(client);
    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Terminal loop error");
    }
    res
}

async fn run_app<A: ChessApi>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut TerminalApp<A>,
) -> Result<()> {
    terminal.draw(|f| app.draw(f)).context("Failed to draw")?;
    app.start().await;

    loop {
        terminal.draw(|f| app.draw(f)).context("Failed to draw")?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if app.handle_key(key).await == LoopControl::Quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                app.handle_mouse(area, mouse).await;
            }
            _ => {}
        }
    }
}
