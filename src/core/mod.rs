//! Core state machine types.
//!
//! This module contains the vocabulary every controller is built from:
//! - State and event definitions via the `State` and `Event` traits
//! - History of accepted transitions

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::{Event, State};
