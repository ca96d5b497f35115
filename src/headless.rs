//! Non-interactive game replay.

use strictly_tictactoe::{GameState, MoveError};
use tracing::{info, instrument};

/// Replays board indices and renders the final board and status.
///
/// # Errors
///
/// Returns the first rejected move.
#[instrument]
pub fn replay_report(moves: &[usize]) -> Result<String, MoveError> {
    let game = GameState::replay(moves)?;
    info!(moves = moves.len(), status = %game.status(), "Replay finished");

    let mut report = game.board().display();
    report.push_str("\n\n");
    report.push_str(&game.status().to_string());
    if !game.status().is_over() {
        report.push_str(&format!(" ({} to move)", game.to_move()));
    }
    Ok(report)
}
