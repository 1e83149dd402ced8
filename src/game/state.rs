use super::win::find_winner;
use super::{Board, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Winner(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// Board, run length and whose turn it is.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    connect_length: usize,
}

impl GameState {
    /// Create initial game state
    pub fn new(width: usize, height: usize, connect_length: usize, first: Player) -> Self {
        GameState {
            board: Board::new(width, height),
            current_player: first,
            connect_length,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn connect_length(&self) -> usize {
        self.connect_length
    }

    /// Winner first, then fullness: a win on the last free cell is still a win.
    pub fn outcome(&self) -> GameOutcome {
        if let Some(player) = find_winner(&self.board, self.connect_length) {
            GameOutcome::Winner(player)
        } else if self.board.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// Drop the current player's piece into `column` and pass the turn.
    /// Returns the row the piece landed in. A rejected move keeps the turn.
    pub fn apply_move(&mut self, column: usize) -> Result<usize, MoveError> {
        let row = self.board.drop_piece(column, self.current_player)?;
        self.current_player = self.current_player.other();
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(7, 6, 4, Player::Blue);
        assert_eq!(state.current_player(), Player::Blue);
        assert_eq!(state.outcome(), GameOutcome::InProgress);
        assert_eq!(state.board().legal_columns().len(), 7);
        assert_eq!(state.connect_length(), 4);
    }

    #[test]
    fn test_apply_move() {
        let mut state = GameState::new(7, 6, 4, Player::Red);
        assert_eq!(state.apply_move(3), Ok(0));

        assert_eq!(state.current_player(), Player::Blue);
        assert_eq!(state.board().get(3, 0), Some(Cell::Red));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut state = GameState::new(3, 3, 3, Player::Red);
        assert_eq!(state.apply_move(5), Err(MoveError::ColumnOutOfRange));
        assert_eq!(state.current_player(), Player::Red);

        for _ in 0..3 {
            state.apply_move(0).unwrap();
        }
        let player = state.current_player();
        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull));
        assert_eq!(state.current_player(), player);
    }

    #[test]
    fn test_vertical_win_scenario() {
        // Red stacks column 3 while Blue stacks column 4 without reaching four.
        let mut state = GameState::new(7, 6, 4, Player::Red);
        for _ in 0..3 {
            state.apply_move(3).unwrap();
            assert_eq!(state.outcome(), GameOutcome::InProgress);
            state.apply_move(4).unwrap();
            assert_eq!(state.outcome(), GameOutcome::InProgress);
        }
        state.apply_move(3).unwrap();

        assert_eq!(state.outcome(), GameOutcome::Winner(Player::Red));
        assert!(state.outcome().is_terminal());
    }

    #[test]
    fn test_draw() {
        // Columns alternate OOXX and XXOO, so no line reaches four.
        let mut state = GameState::new(4, 4, 4, Player::Red);
        let pattern = [0, 1, 0, 1, 1, 0, 1, 0, 2, 3, 2, 3, 3, 2, 3, 2];
        for col in pattern {
            assert_eq!(state.outcome(), GameOutcome::InProgress);
            state.apply_move(col).unwrap();
        }

        assert!(state.board().is_full());
        assert_eq!(state.outcome(), GameOutcome::Draw);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let mut state = GameState::new(3, 3, 3, Player::Red);
        // Red's last piece fills the top right corner, completing the
        // rising diagonal on the final free cell.
        for col in [0, 1, 1, 0, 2, 0, 1, 2] {
            state.apply_move(col).unwrap();
        }
        assert_eq!(state.outcome(), GameOutcome::InProgress);
        state.apply_move(2).unwrap();

        assert!(state.board().is_full());
        assert_eq!(state.outcome(), GameOutcome::Winner(Player::Red));
    }
}
