//! Tic-tac-toe screen.

use super::input::{digit_index, move_cursor};
use super::ui;
use super::{Flow, TerminalGuard};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;
use strictly_tictactoe::{GameState, GameStatus, Position};
use tracing::{debug, info, instrument};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Tic-tac-toe screen state.
#[derive(Debug, Clone)]
pub struct TicTacToeApp {
    game: GameState,
    cursor: Position,
    status_message: String,
}

impl TicTacToeApp {
    /// Creates a new application.
    pub fn new() -> Self {
        let game = GameState::new();
        let status_message = status_line(&game);
        Self {
            game,
            cursor: Position::Center,
            status_message,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Makes a move at the given board index.
    ///
    /// A rejected move leaves the game as it was and only updates the
    /// status line.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, index: usize) {
        match self.game.play(index) {
            Ok(()) => self.status_message = status_line(&self.game),
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self.status_message = format!("{}. {}", e, status_line(&self.game));
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.status_message = status_line(&self.game);
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.make_move(self.cursor.to_index()),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(index) = digit_index(other) {
                    self.make_move(index);
                }
            }
        }
        Flow::Continue
    }
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self::new()
    }
}

fn status_line(game: &GameState) -> String {
    match game.status() {
        GameStatus::InProgress => format!(
            "Player {}'s turn. Arrows + Enter or 1-9 to play, 'r' to reset, 'q' to quit.",
            game.to_move()
        ),
        GameStatus::Won(player) => {
            format!("Player {} wins! Press 'r' to restart or 'q' to quit.", player)
        }
        GameStatus::Draw => "Draw! Press 'r' to restart or 'q' to quit.".to_string(),
    }
}

/// Runs the tic-tac-toe screen until the user quits.
pub fn run_tictactoe() -> Result<()> {
    info!("Starting tic-tac-toe");
    let mut guard = TerminalGuard::enter()?;
    let mut app = TicTacToeApp::new();

    loop {
        guard.terminal.draw(|f| ui::draw_tictactoe(f, &app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code) == Flow::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{Player, Square};

    #[test]
    fn test_digits_play_moves() {
        let mut app = TicTacToeApp::new();
        for key in ['1', '4', '2', '5', '3'] {
            assert_eq!(app.handle_key(KeyCode::Char(key)), Flow::Continue);
        }
        assert_eq!(app.game().status(), &GameStatus::Won(Player::X));
        assert!(app.status_message().contains("Player X wins"));
    }

    #[test]
    fn test_cursor_and_enter_play_move() {
        let mut app = TicTacToeApp::new();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.cursor(), Position::TopLeft);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().board().get(Position::TopLeft), Square::Occupied(Player::X));
    }

    #[test]
    fn test_rejected_move_keeps_game() {
        let mut app = TicTacToeApp::new();
        app.handle_key(KeyCode::Char('5'));
        let before = app.game().clone();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game(), &before);
        assert!(app.status_message().starts_with("Center is already occupied"));
    }

    #[test]
    fn test_reset_and_quit() {
        let mut app = TicTacToeApp::new();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.game(), &GameState::new());
        assert_eq!(app.handle_key(KeyCode::Char('q')), Flow::Quit);
    }
}
