use crate::game::GameState;

/// Interface for computer players.
pub trait Agent {
    /// Pick a 0-based column for the current player.
    ///
    /// The column is not guaranteed to be playable; callers validate it the
    /// same way they validate human input.
    fn select_column(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
