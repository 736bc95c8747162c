//! Game state machine for tic-tac-toe.

use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation, assert_invariants};
use crate::{Board, Cell, MoveError, Player, Square, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// Game ended in a win.
    #[display("Player {} won", _0)]
    Win(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Complete game state: board, player to move, outcome so far.
///
/// Created by [`new_game`], mutated only by [`GameState::attempt_move`].
/// Starting over means replacing the value with a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move. Frozen once the game is over.
    current_player: Player,
    /// Game outcome.
    outcome: Outcome,
    /// Cells played, in order.
    history: Vec<Cell>,
}

/// Unchecked wire form of a [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
    history: Vec<Cell>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvariantViolation;

    /// Accepts only states reachable by playing the recorded history.
    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let game = GameState {
            board: raw.board,
            current_player: raw.current_player,
            outcome: raw.outcome,
            history: raw.history,
        };
        GameInvariants::check_all(&game).map_err(|violations| {
            let descriptions: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            InvariantViolation::new(descriptions.join("; "))
        })?;
        Ok(game)
    }
}

/// Creates a fresh game: empty board, [`Player::FIRST`] to move.
pub fn new_game() -> GameState {
    GameState::new()
}

impl GameState {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::FIRST,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// On success returns the outcome after the move. The current player
    /// switches only when the outcome is still `InProgress`. Rejected moves
    /// leave the state untouched.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        let cell = Cell::new(row, col)?;

        if self.outcome.is_terminal() {
            debug!(outcome = %self.outcome, "Rejecting move after game end");
            return Err(MoveError::GameOver(self.outcome));
        }

        if !self.board.is_empty(cell) {
            debug!(%cell, "Rejecting move onto occupied cell");
            return Err(MoveError::CellOccupied(cell));
        }

        let player = self.current_player;
        self.board.set(cell, Square::Occupied(player));
        self.history.push(cell);

        if rules::completes_line(&self.board, cell, player) {
            self.outcome = Outcome::Win(player);
            info!(%player, %cell, "Game won");
        } else if rules::is_full(&self.board) {
            self.outcome = Outcome::Draw;
            info!(%cell, "Game drawn");
        } else {
            self.current_player = player.opponent();
            debug!(%cell, next = %self.current_player, "Move accepted");
        }

        assert_invariants(self);

        Ok(self.outcome)
    }

    /// Returns the mark at (`row`, `col`).
    pub fn mark_at(&self, row: usize, col: usize) -> Result<Square, MoveError> {
        Ok(self.board.get(Cell::new(row, col)?))
    }

    /// Returns the player to move, or the last mover once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cells played so far, in order.
    pub fn history(&self) -> &[Cell] {
        &self.history
    }

    /// Number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Cells that would accept a move right now.
    ///
    /// Empty once the game is over.
    pub fn available_cells(&self) -> Vec<Cell> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.empty_cells().collect()
    }
}

#[cfg(test)]
impl GameState {
    /// Direct board access for corrupting states in invariant tests.
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
