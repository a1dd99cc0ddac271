//! Win conditions: the predicate that decides when a session is won.

use std::fmt;

use crate::player::PlayerState;

/// A predicate over the player's state, evaluated after every move.
///
/// The condition is injected when the game is assembled; the engine never
/// hardcodes what winning means.
pub struct WinCondition {
    predicate: Box<dyn Fn(&PlayerState) -> bool>,
}

impl WinCondition {
    /// Creates a win condition from a predicate.
    #[must_use]
    pub fn new(predicate: impl Fn(&PlayerState) -> bool + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
        }
    }

    /// A condition that is never met; such sessions end only by quitting.
    #[must_use]
    pub fn never() -> Self {
        Self::new(|_| false)
    }

    /// Returns true if the player's state meets this condition.
    #[must_use]
    pub fn is_met(&self, state: &PlayerState) -> bool {
        (self.predicate)(state)
    }
}

impl Default for WinCondition {
    fn default() -> Self {
        Self::never()
    }
}

impl fmt::Debug for WinCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WinCondition").finish_non_exhaustive()
    }
}
