//! Builder API for controllers and rule tables.
//!
//! This module provides fluent builders and macros for declaring states,
//! events and transition tables with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use machine::ControllerBuilder;
pub use table::RuleTableBuilder;
