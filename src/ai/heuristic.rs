//! Greedy pattern matcher for the computer player.
//!
//! Looks for a window that is one piece short of a run, starting at the
//! winning length and working down to pairs. At the winning length the
//! opponent's windows are checked as well so an immediate loss gets blocked;
//! shorter windows only ever extend the mover's own lines.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use crate::game::win::window;
use crate::game::{Board, Cell, Direction, GameState, Player};

/// Choose a column for `active` on `board` with runs of `length` to win.
///
/// Falls back to a random legal column when nothing matches. On a board
/// with no legal column the result is any value in `0..=width`, which the
/// caller rejects.
pub fn select_move<R: Rng>(board: &Board, length: usize, active: Player, rng: &mut R) -> usize {
    for target in (2..=length).rev() {
        for player in [active, active.other()] {
            if player != active && target < length {
                continue;
            }
            if let Some(col) = find_open_window(board, target, player) {
                return col;
            }
        }
    }

    let legal = board.legal_columns();
    if legal.is_empty() {
        return rng.random_range(0..=board.width());
    }
    let col = legal[rng.random_range(0..legal.len())];
    debug!("no pattern found, random column {}", col);
    col
}

/// First window of `target` cells holding `target - 1` of `player`'s pieces
/// and no opponent piece whose empty cell can be played right now. Returns
/// the column of that cell.
fn find_open_window(board: &Board, target: usize, player: Player) -> Option<usize> {
    let own = player.to_cell();
    let opp = player.other().to_cell();

    for row in 0..board.height() {
        for col in 0..board.width() {
            for dir in Direction::ALL {
                let cells = match window(board, col, row, dir, target) {
                    Some(cells) => cells,
                    None => continue,
                };
                let owned = cells.iter().filter(|&&c| c == own).count();
                if owned != target - 1 || cells.contains(&opp) {
                    continue;
                }

                let gap = match cells.iter().position(|&c| c == Cell::Empty) {
                    Some(gap) => gap,
                    None => continue,
                };
                let (gap_col, gap_row) = dir.step(col, row, gap);
                let (gap_col, gap_row) = (gap_col as usize, gap_row as usize);
                if gap_row == 0 || board.get(gap_col, gap_row - 1) != Some(Cell::Empty) {
                    debug!(
                        "{:?} {} window at ({}, {}) for {}, playing column {}",
                        dir,
                        target,
                        col,
                        row,
                        player.name(),
                        gap_col
                    );
                    return Some(gap_col);
                }
            }
        }
    }
    None
}

/// Computer player driven by [`select_move`].
pub struct HeuristicAgent {
    rng: StdRng,
}

impl HeuristicAgent {
    pub fn new() -> Self {
        HeuristicAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic fallback moves, for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        HeuristicAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for HeuristicAgent {
    fn select_column(&mut self, state: &GameState) -> usize {
        select_move(
            state.board(),
            state.connect_length(),
            state.current_player(),
            &mut self.rng,
        )
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameOutcome;

    fn pick(board: &Board, length: usize, active: Player) -> usize {
        select_move(board, length, active, &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_completes_horizontal_three() {
        let board = Board::from_columns(7, 6, &["X", "O", "O", "O"]);
        assert_eq!(pick(&board, 4, Player::Red), 4);
    }

    #[test]
    fn test_completes_vertical_three() {
        let board = Board::from_columns(7, 6, &["", "", "", "OOO", "X", "X"]);
        assert_eq!(pick(&board, 4, Player::Red), 3);
    }

    #[test]
    fn test_blocks_opponent_three() {
        let board = Board::from_columns(7, 6, &["", "X", "X", "X"]);
        assert_eq!(pick(&board, 4, Player::Red), 0);
    }

    #[test]
    fn test_prefers_win_over_block() {
        let board = Board::from_columns(7, 6, &["", "X", "X", "X", "", "", "OOO"]);
        assert_eq!(pick(&board, 4, Player::Red), 6);
    }

    #[test]
    fn test_ignores_developing_opponent_lines() {
        // Blue's open pair is not blocked; Red extends its own piece.
        let board = Board::from_columns(7, 6, &["", "", "X", "X", "", "", "O"]);
        assert_eq!(pick(&board, 4, Player::Red), 5);
    }

    #[test]
    fn test_skips_unsupported_gap() {
        // The rising diagonal needs (3, 3), which cannot be played yet.
        let board = Board::from_columns(7, 6, &["O", "XO", "XXO"]);
        assert_eq!(pick(&board, 4, Player::Red), 0);
    }

    #[test]
    fn test_falling_window_near_left_edge() {
        // (3,0) (2,1) (1,2) held by Blue with (0,3) playable on top of column 0.
        let board = Board::from_columns(7, 6, &["OXO", "XOX", "OX", "X"]);
        assert_eq!(pick(&board, 4, Player::Blue), 0);
    }

    #[test]
    fn test_random_fallback_stays_legal() {
        let board = Board::new(7, 6);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert!(select_move(&board, 4, Player::Red, &mut rng) < 7);
        }
    }

    #[test]
    fn test_random_fallback_uses_only_open_column() {
        // Every window through the only free cell, (2, 2), holds pieces of
        // both players or a Blue piece, so nothing matches.
        let board = Board::from_columns(3, 3, &["OXO", "OXX", "OX"]);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            assert_eq!(select_move(&board, 3, Player::Red, &mut rng), 2);
        }
    }

    #[test]
    fn test_full_board_returns_value_in_range() {
        let board = Board::from_columns(4, 4, &["OOXX", "XXOO", "OOXX", "XXOO"]);
        assert!(board.is_full());
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            assert!(select_move(&board, 4, Player::Blue, &mut rng) <= 4);
        }
    }

    #[test]
    fn test_agent_name() {
        assert_eq!(HeuristicAgent::with_seed(0).name(), "Heuristic");
    }

    #[test]
    fn test_self_play_finishes() {
        let mut red = HeuristicAgent::with_seed(1);
        let mut blue = HeuristicAgent::with_seed(2);
        let mut state = GameState::new(7, 6, 4, Player::Red);

        while state.outcome() == GameOutcome::InProgress {
            let col = match state.current_player() {
                Player::Red => red.select_column(&state),
                Player::Blue => blue.select_column(&state),
            };
            state.apply_move(col).unwrap();
        }
        assert!(state.outcome().is_terminal());
    }
}
