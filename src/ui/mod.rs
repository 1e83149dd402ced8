//! Terminal front end: the line-based game loop and text rendering.

mod app;
pub mod render;

pub use app::{parse_command, App, Command, GameEnd};
