//! Alternating turn invariant: players alternate O, X, O, X, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: the player to move follows from the number of moves.
///
/// While the game is in progress the first player moves on even plies and
/// the second on odd plies. Once the game is over the current player is
/// frozen on whoever made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let moves = game.move_count();
        let on_ply = |ply: usize| {
            if ply % 2 == 0 {
                Player::FIRST
            } else {
                Player::FIRST.opponent()
            }
        };

        if game.is_over() {
            moves > 0 && game.current_player() == on_ply(moves - 1)
        } else {
            game.current_player() == on_ply(moves)
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (O, X, O, X, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, new_game};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&new_game()));
    }

    #[test]
    fn test_single_move_holds() {
        let mut game = new_game();
        game.attempt_move(1, 1).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_finished_game_holds() {
        let mut game = new_game();
        for (row, col) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
            game.attempt_move(row, col).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Win(Player::O));
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = new_game();
        game.attempt_move(0, 0).unwrap();
        game.set_current_player(Player::O);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
