//! Core Connect Four game logic: board representation, player types, run
//! detection and the game state.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell};
pub use player::Player;
pub use state::{GameOutcome, GameState};
pub use win::{find_winner, Direction};
