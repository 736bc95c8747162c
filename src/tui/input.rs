//! Keyboard mapping onto board cells.

use crossterm::event::KeyCode;
use noughts_core::{Cell, SIZE};

/// Moves the cursor one cell in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(SIZE - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(SIZE - 1)),
        _ => (row, col),
    };
    Cell::new(row, col).unwrap_or(cursor)
}

/// Maps digit keys `1`-`9` to cells in row-major order.
pub fn digit_cell(key: KeyCode) -> Option<Cell> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Cell::from_index),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: usize, col: usize) -> Cell {
        Cell::new(row, col).unwrap()
    }

    #[test]
    fn test_arrows_move_within_board() {
        assert_eq!(move_cursor(cell(1, 1), KeyCode::Up), cell(0, 1));
        assert_eq!(move_cursor(cell(1, 1), KeyCode::Down), cell(2, 1));
        assert_eq!(move_cursor(cell(1, 1), KeyCode::Left), cell(1, 0));
        assert_eq!(move_cursor(cell(1, 1), KeyCode::Right), cell(1, 2));
    }

    #[test]
    fn test_edges_clamp() {
        assert_eq!(move_cursor(cell(0, 0), KeyCode::Up), cell(0, 0));
        assert_eq!(move_cursor(cell(0, 0), KeyCode::Left), cell(0, 0));
        assert_eq!(move_cursor(cell(2, 2), KeyCode::Down), cell(2, 2));
        assert_eq!(move_cursor(cell(2, 2), KeyCode::Right), cell(2, 2));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(cell(2, 0), KeyCode::Enter), cell(2, 0));
    }

    #[test]
    fn test_digits_map_row_major() {
        assert_eq!(digit_cell(KeyCode::Char('1')), Some(cell(0, 0)));
        assert_eq!(digit_cell(KeyCode::Char('5')), Some(cell(1, 1)));
        assert_eq!(digit_cell(KeyCode::Char('9')), Some(cell(2, 2)));
        assert_eq!(digit_cell(KeyCode::Char('0')), None);
        assert_eq!(digit_cell(KeyCode::Char('x')), None);
        assert_eq!(digit_cell(KeyCode::Enter), None);
    }
}
