//! Property tests over arbitrary move sequences.

use noughts_core::invariants::{GameInvariants, InvariantSet};
use noughts_core::{MoveError, Outcome, new_game};
use proptest::collection;
use proptest::prelude::*;

fn moves() -> impl Strategy<Value = Vec<(usize, usize)>> {
    collection::vec((0usize..4, 0usize..4), 0..24)
}

proptest! {
    #[test]
    fn occupied_cells_equal_accepted_moves(moves in moves()) {
        let mut game = new_game();
        let mut accepted = 0;

        for (row, col) in moves {
            if game.attempt_move(row, col).is_ok() {
                accepted += 1;
            }
            prop_assert_eq!(game.board().occupied_count(), accepted);
            prop_assert_eq!(game.move_count(), accepted);
        }
    }

    #[test]
    fn player_alternates_until_terminal(moves in moves()) {
        let mut game = new_game();

        for (row, col) in moves {
            let before = game.current_player();
            match game.attempt_move(row, col) {
                Ok(Outcome::InProgress) => {
                    prop_assert_eq!(game.current_player(), before.opponent());
                }
                Ok(_) => {
                    prop_assert_eq!(game.current_player(), before);
                }
                Err(_) => {
                    prop_assert_eq!(game.current_player(), before);
                }
            }
        }
    }

    #[test]
    fn rejected_moves_never_mutate(moves in moves()) {
        let mut game = new_game();

        for (row, col) in moves {
            let before = game.clone();
            if let Err(err) = game.attempt_move(row, col) {
                prop_assert_eq!(&game, &before);
                let off_board = row > 2 || col > 2;
                prop_assert_eq!(matches!(err, MoveError::InvalidArgument { .. }), off_board);
            }
        }
    }

    #[test]
    fn invariants_hold_for_any_sequence(moves in moves()) {
        let mut game = new_game();

        for (row, col) in moves {
            let _ = game.attempt_move(row, col);
            prop_assert!(GameInvariants::check_all(&game).is_ok());
        }
    }
}
