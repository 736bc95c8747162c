//! Win detection logic for tic-tac-toe.

use crate::types::SIZE;
use crate::{Board, Cell, Player, Square};
use tracing::instrument;

/// Checks whether the mark at `cell` completes three in a row for `player`.
///
/// Only the lines through `cell` are inspected: its row, its column, and
/// each diagonal the cell lies on.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, cell: Cell, player: Player) -> bool {
    let mark = Square::Occupied(player);
    let owns = |row: usize, col: usize| Cell::new(row, col).is_ok_and(|c| board.get(c) == mark);

    if (0..SIZE).all(|col| owns(cell.row(), col)) {
        return true;
    }
    if (0..SIZE).all(|row| owns(row, cell.col())) {
        return true;
    }
    if cell.on_main_diagonal() && (0..SIZE).all(|d| owns(d, d)) {
        return true;
    }
    cell.on_anti_diagonal() && (0..SIZE).all(|d| owns(d, SIZE - 1 - d))
}
