//! Application state and key handling.

use super::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use noughts_core::{Cell, GameState, MoveError, Outcome, new_game};
use tracing::{debug, info, instrument, warn};

/// Status line text for a game.
pub fn status_text(game: &GameState) -> String {
    match game.outcome() {
        Outcome::InProgress => format!("Player {}'s turn", game.current_player()),
        Outcome::Win(player) => format!("Player {} won!", player),
        Outcome::Draw => "Match draw!".to_string(),
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Cell,
    status_message: String,
    show_hints: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(show_hints: bool) -> Self {
        let game = new_game();
        Self {
            status_message: status_text(&game),
            game,
            cursor: Cell::CENTER,
            show_hints,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether empty cells show their digit key.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a single key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('n' | 'N' | 'r' | 'R') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place_at(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {
                if let Some(cell) = digit_cell(key) {
                    self.cursor = cell;
                    self.place_at(cell);
                }
            }
        }
    }

    /// Places the current player's mark at `cell`.
    #[instrument(skip(self))]
    pub fn place_at(&mut self, cell: Cell) {
        match self.game.attempt_move(cell.row(), cell.col()) {
            Ok(outcome) => {
                debug!(%outcome, "Move applied to UI state");
                self.status_message = status_text(&self.game);
            }
            Err(e @ MoveError::GameOver(_)) => {
                debug!(error = %e, "Move ignored after game end");
                self.status_message =
                    format!("{} Press 'n' for a new game.", status_text(&self.game));
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.status_message = format!("{}. {}", e, status_text(&self.game));
            }
        }
    }

    /// Starts a new game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = new_game();
        self.cursor = Cell::CENTER;
        self.status_message = status_text(&self.game);
    }
}
