//! Strictly Demos - a terminal stopwatch and tic-tac-toe game.
//!
//! The game and timer logic live in the `strictly_tictactoe` and
//! `strictly_stopwatch` crates. This crate adds settings, logging, a headless
//! replay mode and the terminal screens that drive the engines.
//!
//! # Architecture
//!
//! - **Engines**: pure state in, state out; no rendering dependency
//! - **Settings**: optional TOML file plus command-line overrides
//! - **TUI**: one screen per demo, re-rendered from engine output each frame

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod headless;
mod logging;
mod settings;
mod tui;

pub use headless::replay_report;
pub use logging::{init_file_logging, init_stderr_logging};
pub use settings::{ConfigError, DEFAULT_SETTINGS_FILE, Settings};
pub use tui::{
    Flow, StopwatchApp, TicTacToeApp, draw_stopwatch, draw_tictactoe, run_stopwatch,
    run_tictactoe,
};

pub use strictly_stopwatch as stopwatch;
pub use strictly_tictactoe as tictactoe;
