//! Outcome consistency invariant: the recorded outcome matches the board.

use super::Invariant;
use crate::{GameState, Outcome, Player, rules};

/// Invariant: the outcome is what the last move produced.
///
/// A win must be completed by the last cell played, for the player who
/// played it. A draw needs a full board with no such line. An in-progress
/// game has neither.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let last_mover = if game.move_count() % 2 == 1 {
            Player::FIRST
        } else {
            Player::FIRST.opponent()
        };
        let last_line = game
            .history()
            .last()
            .is_some_and(|&cell| rules::completes_line(board, cell, last_mover));

        match game.outcome() {
            Outcome::InProgress => !rules::is_full(board) && !last_line,
            Outcome::Win(player) => player == last_mover && last_line,
            Outcome::Draw => rules::is_full(board) && !last_line,
        }
    }

    fn description() -> &'static str {
        "Outcome matches the board after the last move"
    }
}
