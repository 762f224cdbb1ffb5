//! Build errors for controller and rule table builders.

use thiserror::Error;

/// Errors that can occur when building controllers and rule tables.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition table not specified. Call .table(table) before .build()")]
    MissingTable,

    #[error("No rules defined. Add at least one rule")]
    NoRules,

    #[error("Conflicting rules for '{event}' from '{from}': '{existing}' and '{requested}'")]
    ConflictingRule {
        from: String,
        event: String,
        existing: String,
        requested: String,
    },

    #[error("Invalid controller configuration: {0}")]
    InvalidConfig(String),
}
