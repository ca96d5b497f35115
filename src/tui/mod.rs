//! Terminal presentation layer.
//!
//! Each screen keeps its engine state in an app struct, maps key presses to
//! engine calls, and re-renders from the engine's output every frame.

mod input;
mod stopwatch;
mod tictactoe;
mod ui;

pub use stopwatch::{StopwatchApp, run_stopwatch};
pub use tictactoe::{TicTacToeApp, run_tictactoe};
pub use ui::{draw_stopwatch, draw_tictactoe};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, warn};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the screen.
    Quit,
}

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode alternate-screen terminal. Restores the terminal on drop, so an
/// early return or panic unwinding through the loop still leaves the shell
/// usable.
struct TerminalGuard {
    terminal: CrosstermTerminal,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        debug!("Terminal entered raw mode");
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        ) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        let _ = self.terminal.show_cursor();
        debug!("Terminal restored");
    }
}
