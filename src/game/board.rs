use super::player::Player;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Blue,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Blue => Some(Player::Blue),
        }
    }
}

/// A `width` x `height` grid stored column by column.
///
/// Column 0 is the leftmost column and row 0 is the bottom row: pieces fall
/// towards row 0, so the occupied cells of every column form a contiguous
/// run starting at row 0. Rendering top-down is the caller's job, see
/// [`Board::rows_top_down`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.width && row < self.height).then(|| col * self.height + row)
    }

    /// Get the cell at a specific position, `None` when off the board.
    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        self.index(col, row).map(|i| self.cells[i])
    }

    /// Signed lookup for directional scans that may step past an edge.
    pub fn cell_at(&self, col: isize, row: isize) -> Option<Cell> {
        if col < 0 || row < 0 {
            return None;
        }
        self.get(col as usize, row as usize)
    }

    /// Number of pieces in a column, `None` for a column off the board.
    pub fn column_height(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        let start = col * self.height;
        Some(
            self.cells[start..start + self.height]
                .iter()
                .take_while(|&&c| c != Cell::Empty)
                .count(),
        )
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.column_height(col).map_or(true, |h| h == self.height)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        let row = self.column_height(col).ok_or(MoveError::ColumnOutOfRange)?;
        if row == self.height {
            return Err(MoveError::ColumnFull);
        }

        let i = col * self.height + row;
        self.cells[i] = player.to_cell();
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Columns that can still take a piece, left to right.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Rows in display order: the top row first.
    pub fn rows_top_down(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        (0..self.height).rev().map(move |row| {
            (0..self.width)
                .map(|col| self.cells[col * self.height + row])
                .collect()
        })
    }

    /// Build a board from bottom-up column strings, `O` for Red, `X` for Blue
    /// and anything else for an empty cell.
    #[cfg(test)]
    pub(crate) fn from_columns(width: usize, height: usize, columns: &[&str]) -> Self {
        let mut board = Board::new(width, height);
        for (col, pieces) in columns.iter().enumerate() {
            for ch in pieces.chars() {
                match ch {
                    'O' => board.drop_piece(col, Player::Red).unwrap(),
                    'X' => board.drop_piece(col, Player::Blue).unwrap(),
                    _ => break,
                };
            }
        }
        board
    }
}
