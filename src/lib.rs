//! # Connect Four
//!
//! Connect Four for the terminal, with any board size and run length and a
//! pattern-matching computer opponent.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, run detection, game state
//! - [`ai`] — Agent trait and the heuristic move selector
//! - [`ui`] — Line-based game loop and board rendering
//! - [`config`] — TOML configuration loading and board sizing
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
