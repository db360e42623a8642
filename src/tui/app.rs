//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use rewind_tictactoe::{Game, GameView, Play, Position};
use tracing::{debug, instrument, warn};

use super::input::{digit_position, move_cursor};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Holds the game session plus presentation-only state (cursors, focus,
/// last notice). Rendering pulls a fresh [`GameView`] every frame.
#[derive(Debug, Getters)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    history_cursor: usize,
    notice: Option<String>,
}

impl App {
    /// Creates a new application at the empty board.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            history_cursor: 0,
            notice: None,
        }
    }

    /// Derives the view to render.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Handles one key press.
    #[instrument(skip(self, key), fields(code = ?key.code, focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.history_cursor = self.game.history().current_index();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.click(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let last = self.game.history().len() - 1;
        match code {
            KeyCode::Up => self.history_cursor = self.history_cursor.saturating_sub(1),
            KeyCode::Down => self.history_cursor = (self.history_cursor + 1).min(last),
            KeyCode::Home => self.history_cursor = 0,
            KeyCode::End => self.history_cursor = last,
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.history_cursor),
            _ => {}
        }
    }

    /// Raises a cell click into the game.
    pub fn click(&mut self, pos: Position) {
        match self.game.click(pos) {
            Play::Recorded(action) => {
                debug!(%action, "Move applied to UI state");
                self.notice = None;
            }
            Play::Ignored(reason) => {
                self.notice = Some(reason.to_string());
            }
        }
        self.history_cursor = self.game.history().current_index();
    }

    /// Raises a move-list selection into the game.
    pub fn select(&mut self, index: usize) {
        match self.game.select_history(index) {
            Ok(()) => {
                self.notice = None;
                self.history_cursor = index;
            }
            Err(e) => {
                warn!(error = %e, "Move list offered an invalid index");
                self.notice = Some(e.to_string());
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.restart();
        self.cursor = Position::Center;
        self.history_cursor = 0;
        self.notice = Some("Game restarted".to_string());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
