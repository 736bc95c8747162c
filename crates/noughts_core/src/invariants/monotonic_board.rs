//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, GameState, Player, Square};

/// Invariant: the board is exactly the move history, played in turn.
///
/// Replaying the history from an empty board, alternating from
/// [`Player::FIRST`], must never land on an occupied square and must
/// reproduce the current board. This also pins the number of occupied
/// squares to the number of moves.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();
        let mut player = Player::FIRST;

        for &cell in game.history() {
            if !reconstructed.is_empty(cell) {
                return false;
            }
            reconstructed.set(cell, Square::Occupied(player));
            player = player.opponent();
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic and match the move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, new_game};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&new_game()));
    }

    #[test]
    fn test_played_game_holds() {
        let mut game = new_game();
        for (row, col) in [(0, 0), (2, 2), (0, 2), (2, 0)] {
            game.attempt_move(row, col).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&game));
        assert_eq!(game.board().occupied_count(), game.move_count());
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = new_game();
        game.attempt_move(1, 1).unwrap();
        game.board_mut()
            .set(Cell::new(1, 1).unwrap(), Square::Occupied(Player::X));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_cleared_square_violates() {
        let mut game = new_game();
        game.attempt_move(2, 1).unwrap();
        game.board_mut().set(Cell::new(2, 1).unwrap(), Square::Empty);
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
