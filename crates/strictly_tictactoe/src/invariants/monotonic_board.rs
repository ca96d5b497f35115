//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, GameState, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the history onto an empty board must never touch an occupied
/// square and must reproduce the current board exactly. This also pins the
/// number of occupied squares to the history length.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_multiple_moves_hold() {
        let game = GameState::replay(&[0, 4, 2, 6]).unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = GameState::replay(&[4]).unwrap();
        game.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_square_without_history_violates() {
        let mut game = GameState::replay(&[4]).unwrap();
        game.board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_history_entry_violates() {
        let mut game = GameState::replay(&[4]).unwrap();
        game.history.push(Move::new(Player::O, Position::Center));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
