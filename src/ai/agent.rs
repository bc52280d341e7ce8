use crate::game::{Action, GameState};

/// Universal interface for anything that can take a turn.
pub trait Agent {
    /// Choose an action for the side to move. `None` means the side has no
    /// legal action at all.
    ///
    /// Implementations must not assume the action will be committed; the
    /// turn controller applies it to its own state.
    fn select_action(&mut self, state: &GameState) -> Option<Action>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
