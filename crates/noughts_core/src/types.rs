//! Core domain types for tic-tac-toe.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player O (goes first).
    #[display("O")]
    O,
    /// Player X (goes second).
    #[display("X")]
    X,
}

impl Player {
    /// The player who opens every game.
    pub const FIRST: Player = Player::O;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }
}

/// Mark held by a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// A validated (row, column) coordinate on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "RawCell")]
#[display("({}, {})", row, col)]
pub struct Cell {
    row: usize,
    col: usize,
}

/// Unchecked wire form of a [`Cell`].
#[derive(Deserialize)]
struct RawCell {
    row: usize,
    col: usize,
}

impl TryFrom<RawCell> for Cell {
    type Error = MoveError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        Cell::new(raw.row, raw.col)
    }
}

impl Cell {
    /// The middle cell, (1, 1).
    pub const CENTER: Cell = Cell { row: 1, col: 1 };

    /// Creates a cell, rejecting coordinates outside the 3x3 grid.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= SIZE || col >= SIZE {
            return Err(MoveError::InvalidArgument { row, col });
        }
        Ok(Self { row, col })
    }

    /// Creates a cell from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SIZE * SIZE).then(|| Self {
            row: index / SIZE,
            col: index % SIZE,
        })
    }

    /// Row of this cell.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column of this cell.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// True when the cell sits on the top-left to bottom-right diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// True when the cell sits on the top-right to bottom-left diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        self.row + self.col == SIZE - 1
    }

    /// All nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..SIZE * SIZE).filter_map(Cell::from_index)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; SIZE * SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; SIZE * SIZE],
        }
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.index()]
    }

    /// Sets the square at the given cell.
    pub(crate) fn set(&mut self, cell: Cell, square: Square) {
        self.squares[cell.index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; SIZE * SIZE] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(|cell| self.is_empty(*cell))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let pos = row * SIZE + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < SIZE - 1 {
                    f.write_str("|")?;
                }
            }
            if row < SIZE - 1 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rejects_out_of_range() {
        assert_eq!(
            Cell::new(3, 0),
            Err(MoveError::InvalidArgument { row: 3, col: 0 })
        );
        assert_eq!(
            Cell::new(0, 7),
            Err(MoveError::InvalidArgument { row: 0, col: 7 })
        );
        assert!(Cell::new(2, 2).is_ok());
    }

    #[test]
    fn test_cell_index_matches_row_major() {
        let cell = Cell::new(1, 2).unwrap();
        assert_eq!(cell.index(), 5);
        assert_eq!(Cell::from_index(5), Some(cell));
        assert_eq!(Cell::from_index(9), None);
    }

    #[test]
    fn test_diagonal_membership() {
        let center = Cell::new(1, 1).unwrap();
        assert!(center.on_main_diagonal());
        assert!(center.on_anti_diagonal());

        let top_right = Cell::new(0, 2).unwrap();
        assert!(!top_right.on_main_diagonal());
        assert!(top_right.on_anti_diagonal());

        let middle_left = Cell::new(1, 0).unwrap();
        assert!(!middle_left.on_main_diagonal());
        assert!(!middle_left.on_anti_diagonal());
    }

    #[test]
    fn test_all_cells_in_order() {
        let indices: Vec<_> = Cell::all().map(Cell::index).collect();
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::new();
        board.set(Cell::new(0, 0).unwrap(), Square::Occupied(Player::O));
        board.set(Cell::new(1, 1).unwrap(), Square::Occupied(Player::X));
        assert_eq!(board.to_string(), "O|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_empty_cells_skip_occupied() {
        let mut board = Board::new();
        board.set(Cell::new(0, 1).unwrap(), Square::Occupied(Player::O));
        assert_eq!(board.occupied_count(), 1);
        assert_eq!(board.empty_cells().count(), 8);
        assert!(board.empty_cells().all(|c| c.index() != 1));
    }

    #[test]
    fn test_deserialize_validates_cell() {
        let cell: Cell = serde_json::from_str(r#"{"row":2,"col":1}"#).unwrap();
        assert_eq!(cell, Cell::new(2, 1).unwrap());

        let err = serde_json::from_str::<Cell>(r#"{"row":7,"col":0}"#).unwrap_err();
        assert!(err.to_string().contains("Cell (7, 0) is off the board"));
    }

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::FIRST, Player::O);
    }
}
