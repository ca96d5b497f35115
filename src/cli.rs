//! Command-line interface for strictly_demos.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_demos::DEFAULT_SETTINGS_FILE;

/// Strictly Demos - terminal stopwatch and tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "strictly_demos")]
#[command(about = "Terminal stopwatch and tic-tac-toe demos", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (ignored if it does not exist)
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_FILE)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the stopwatch
    Stopwatch {
        /// Tick period in milliseconds (overrides the settings file)
        #[arg(long)]
        tick_ms: Option<u64>,
    },

    /// Play tic-tac-toe
    Tictactoe {
        /// Replay comma-separated board indices (0-8) without a UI
        #[arg(long, value_delimiter = ',')]
        moves: Option<Vec<usize>>,
    },

    /// Print milliseconds as MM:SS:CC
    Format {
        /// Elapsed milliseconds
        millis: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwatch_override() {
        let cli = Cli::try_parse_from(["strictly_demos", "stopwatch", "--tick-ms", "25"]).unwrap();
        assert_eq!(cli.command, Command::Stopwatch { tick_ms: Some(25) });
        assert_eq!(cli.config, PathBuf::from(DEFAULT_SETTINGS_FILE));
    }

    #[test]
    fn test_headless_moves() {
        let cli =
            Cli::try_parse_from(["strictly_demos", "tictactoe", "--moves", "0,3,1,4,2"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Tictactoe {
                moves: Some(vec![0, 3, 1, 4, 2])
            }
        );
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["strictly_demos", "format", "61005", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.command, Command::Format { millis: 61_005 });
        assert_eq!(cli.config, PathBuf::from("x.toml"));
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["strictly_demos"]).is_err());
    }
}
