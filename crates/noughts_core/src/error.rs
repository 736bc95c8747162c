//! Errors returned when a move is rejected.

use crate::{Cell, Outcome};

/// Error that can occur when validating or applying a move.
///
/// A rejected move never changes the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column is outside the 3x3 grid.
    #[display("Cell ({}, {}) is off the board", row, col)]
    InvalidArgument {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Cell),

    /// The game has already reached a terminal outcome.
    #[display("Game is already over: {}", _0)]
    GameOver(#[error(not(source))] Outcome),
}

impl MoveError {
    /// True for moves that were well-formed but not legal right now.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, MoveError::CellOccupied(_) | MoveError::GameOver(_))
    }
}
