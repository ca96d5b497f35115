//! Game state and the pure transition functions that drive it.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state.
///
/// Transitions never mutate a state in place: [`GameState::apply_move`]
/// returns the successor and leaves `self` untouched, so a rejected move is
/// simply the old state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next accepted move places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the winner, if the game has one.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the line that won the game, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board)
    }

    /// Returns the empty positions, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// On success the turn passes to the opponent, even when the move ends
    /// the game, and the status is re-evaluated (win first, then draw).
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index > 8`
    /// - [`MoveError::GameOver`] once the game is won or drawn
    /// - [`MoveError::SquareOccupied`] if the square already holds a mark
    #[instrument(skip(self), fields(player = %self.to_move, status = ?self.status))]
    pub fn apply_move(&self, index: usize) -> Result<GameState, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let action = Move::new(self.to_move, position);

        MoveContract::pre(self, &action).inspect_err(|e| debug!(error = %e, "Move rejected"))?;

        let mut next = self.clone();
        next.board.set(position, Square::Occupied(action.player));
        next.history.push(action);
        next.to_move = next.to_move.opponent();
        next.status = rules::evaluate(&next.board);

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(%action, status = ?next.status, "Move applied");
        Ok(next)
    }

    /// Applies a move in place. On error `self` is unchanged.
    pub fn play(&mut self, index: usize) -> Result<(), MoveError> {
        *self = self.apply_move(index)?;
        Ok(())
    }

    /// Returns the game to its initial state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    /// Replays board indices from the initial state.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<GameState, MoveError> {
        indices
            .iter()
            .try_fold(Self::new(), |game, &index| game.apply_move(index))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies a move to `state`, returning the successor state.
///
/// See [`GameState::apply_move`].
pub fn apply_move(state: &GameState, index: usize) -> Result<GameState, MoveError> {
    state.apply_move(index)
}

/// Returns the mark on the first complete line, scanning rows, columns, then
/// diagonals.
pub fn detect_winner(board: &Board) -> Option<Player> {
    rules::check_winner(board)
}

/// Returns the initial game state.
pub fn reset() -> GameState {
    GameState::new()
}
