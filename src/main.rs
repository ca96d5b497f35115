//! Strictly Demos - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_demos::{
    Settings, init_file_logging, init_stderr_logging, replay_report, run_stopwatch,
    run_tictactoe, stopwatch::format_elapsed,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Stopwatch { tick_ms } => {
            let settings = settings.with_tick_interval_ms(tick_ms);
            settings.validate()?;
            init_file_logging(settings.log_file())?;
            run_stopwatch(&settings).await
        }
        Command::Tictactoe { moves: Some(moves) } => {
            init_stderr_logging();
            let report = replay_report(&moves).context("Replay rejected a move")?;
            println!("{}", report);
            Ok(())
        }
        Command::Tictactoe { moves: None } => {
            init_file_logging(settings.log_file())?;
            run_tictactoe()
        }
        Command::Format { millis } => {
            init_stderr_logging();
            info!(millis, "Formatting elapsed time");
            println!("{}", format_elapsed(millis));
            Ok(())
        }
    }
}
