//! Status consistency invariant: the recorded status matches the board.

use super::Invariant;
use crate::{GameState, rules};

/// Invariant: the status is exactly what the board implies.
///
/// `Won(p)` only when some win line is uniformly `p`, `Draw` only on a full
/// board without a line, `InProgress` otherwise.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        *game.status() == rules::evaluate(game.board())
    }

    fn description() -> &'static str {
        "Status agrees with the board (win, draw or in progress)"
    }
}
