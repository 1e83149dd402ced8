//! Full-board run detection.

use super::board::{Board, Cell};
use super::player::Player;

/// The four scan directions. Every line on the board is covered by one of
/// them when scanned forward from its first cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Up and to the right.
    Rising,
    /// Up and to the left.
    Falling,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Rising,
        Direction::Falling,
    ];

    /// Step as `(dcol, drow)`.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::Rising => (1, 1),
            Direction::Falling => (-1, 1),
        }
    }

    /// Position of the `n`th cell of a window starting at `(col, row)`.
    pub fn step(self, col: usize, row: usize, n: usize) -> (isize, isize) {
        let (dc, dr) = self.delta();
        let n = n as isize;
        (col as isize + n * dc, row as isize + n * dr)
    }
}

/// The `len` cells starting at `(col, row)` in `dir`, or `None` when the
/// window does not fit on the board.
pub fn window(board: &Board, col: usize, row: usize, dir: Direction, len: usize) -> Option<Vec<Cell>> {
    if len == 0 {
        return Some(Vec::new());
    }

    // Both ends must be on the board. For a falling window this rejects any
    // start column below len - 1, so a window never wraps past column 0.
    let (last_col, last_row) = dir.step(col, row, len - 1);
    if last_col < 0 || last_col >= board.width() as isize || last_row >= board.height() as isize {
        return None;
    }

    (0..len)
        .map(|n| {
            let (c, r) = dir.step(col, row, n);
            board.cell_at(c, r)
        })
        .collect()
}

/// Find a player owning `length` contiguous cells in any direction.
///
/// Cells are scanned column by column, bottom to top; the first qualifying
/// window wins. Runs longer than `length` qualify as well.
pub fn find_winner(board: &Board, length: usize) -> Option<Player> {
    for col in 0..board.width() {
        for row in 0..board.height() {
            let player = match board.get(col, row).and_then(Cell::player) {
                Some(player) => player,
                None => continue,
            };
            let cell = player.to_cell();

            for dir in Direction::ALL {
                if let Some(cells) = window(board, col, row, dir, length) {
                    if cells.iter().all(|&c| c == cell) {
                        return Some(player);
                    }
                }
            }
        }
    }
    None
}
