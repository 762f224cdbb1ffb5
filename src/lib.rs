//! Keystone: shared instances and table-driven state controllers
//!
//! Two independent building blocks:
//!
//! - **Registry**: [`SharedInstanceRegistry`] hands out at most one instance
//!   per type, constructed lazily and safely under concurrent callers.
//! - **Controllers**: [`StateController`] moves between the variants of a
//!   closed state enum according to an explicit [`TransitionTable`].
//!   Rejected events are a returned [`Outcome`], never an error.
//!
//! # Example
//!
//! ```rust
//! use keystone::game::{new_game, GameEvent, GameState};
//!
//! let mut game = new_game();
//! assert_eq!(game.current_state(), &GameState::Welcome);
//!
//! assert!(game.handle(GameEvent::ToPlaying).is_entered());
//! assert!(game.handle(GameEvent::ToWelcome).is_rejected());
//! assert_eq!(game.current_state(), &GameState::Playing);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod game;
pub mod machine;
pub mod registry;

// Re-export commonly used types
pub use builder::{BuildError, ControllerBuilder, RuleTableBuilder};
pub use config::ControllerConfig;
pub use self::core::{Event, State, StateHistory, StateTransition};
pub use machine::{Outcome, Rule, RuleTable, StateController, TransitionTable};
pub use registry::SharedInstanceRegistry;
