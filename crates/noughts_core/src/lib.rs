//! Pure tic-tac-toe game logic.
//!
//! [`GameState`] owns the board, the player to move and the outcome. A
//! presentation layer drives it through [`GameState::attempt_move`] and
//! reads it back with [`GameState::mark_at`] and
//! [`GameState::current_player`]; nothing here knows how the board is shown.
//!
//! ```
//! use noughts_core::{new_game, Outcome, Player};
//!
//! let mut game = new_game();
//! assert_eq!(game.attempt_move(1, 1), Ok(Outcome::InProgress));
//! assert_eq!(game.current_player(), Player::X);
//! assert!(game.attempt_move(1, 1).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use error::MoveError;
pub use game::{GameState, Outcome, new_game};
pub use types::{Board, Cell, Player, SIZE, Square};
