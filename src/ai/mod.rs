//! Computer players.

mod agent;
pub mod heuristic;

pub use agent::Agent;
pub use heuristic::{select_move, HeuristicAgent};
