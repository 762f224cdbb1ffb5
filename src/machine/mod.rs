//! Table-driven state controllers.
//!
//! - **Tables**: finite mappings from (state, event) to a [`Rule`]
//! - **Controller**: holds the current state and applies a table to events
//! - **Outcome**: what happened to a single event, including rejection

mod controller;
mod outcome;
mod table;

pub use controller::{ControllerStats, StateController};
pub use outcome::Outcome;
pub use table::{Rule, RuleTable, TransitionTable};
