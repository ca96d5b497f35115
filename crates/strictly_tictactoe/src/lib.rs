//! Pure tic-tac-toe game logic.
//!
//! The engine owns the board, the turn order and the game status. Every
//! operation takes explicit state and returns explicit state, so the engine
//! can be driven and tested without any rendering framework.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameState, GameStatus, Player};
//!
//! let game = GameState::replay(&[0, 3, 1, 4, 2]).unwrap();
//! assert_eq!(game.status(), &GameStatus::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod invariants;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, LegalMove, MoveContract};
pub use game::{GameState, apply_move, detect_winner, reset};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, StatusConsistentInvariant, TicTacToeInvariants,
};
pub use position::Position;
pub use rules::{WIN_LINES, check_winner, evaluate, is_draw, is_full, winning_line};
pub use types::{Board, GameStatus, Player, Square};
