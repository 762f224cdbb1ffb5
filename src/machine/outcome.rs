//! Result of handling one event.

use crate::core::{Event, State};

/// Outcome of [`StateController::handle`](super::StateController::handle).
///
/// Rejection is an expected result, not an error: the controller stays where
/// it was and the caller decides what to do about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<S: State, E: Event> {
    /// The controller left `from` and entered `to`
    Entered { from: S, to: S },

    /// The event named the current state; nothing changed
    Unchanged(S),

    /// The table does not permit `event` from `state`; nothing changed
    Rejected { state: S, event: E },
}

impl<S: State, E: Event> Outcome<S, E> {
    /// State the controller is in after handling the event.
    pub fn state(&self) -> &S {
        match self {
            Self::Entered { to, .. } => to,
            Self::Unchanged(state) => state,
            Self::Rejected { state, .. } => state,
        }
    }

    pub fn is_entered(&self) -> bool {
        matches!(self, Self::Entered { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
