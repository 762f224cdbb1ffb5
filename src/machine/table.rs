//! Transition tables: finite mappings from (state, event) to a rule.

use crate::core::{Event, State};
use std::collections::HashMap;

/// What a transition table says about a (state, event) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rule<S: State> {
    /// Move to the given state
    Enter(S),

    /// The event names the state the controller is already in
    Stay,

    /// The transition is not permitted
    Reject,
}

/// A finite mapping from (current state, event) to a [`Rule`].
///
/// Implementations must be pure: the same pair always resolves to the same
/// rule. Hand-written tables should use an exhaustive `match` over both
/// enums so the compiler checks that every pair is covered.
pub trait TransitionTable<S: State, E: Event> {
    fn resolve(&self, from: &S, event: &E) -> Rule<S>;
}

impl<S, E, F> TransitionTable<S, E> for F
where
    S: State,
    E: Event,
    F: Fn(&S, &E) -> Rule<S>,
{
    fn resolve(&self, from: &S, event: &E) -> Rule<S> {
        self(from, event)
    }
}

/// Data-driven transition table.
///
/// Built with [`RuleTableBuilder`](crate::builder::RuleTableBuilder). Pairs
/// that were never declared resolve to [`Rule::Reject`].
#[derive(Clone, Debug)]
pub struct RuleTable<S: State, E: Event> {
    pub(crate) rules: HashMap<(S, E), Rule<S>>,
}

impl<S: State, E: Event> RuleTable<S, E> {
    /// Number of declared (state, event) pairs.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<S: State, E: Event> TransitionTable<S, E> for RuleTable<S, E> {
    fn resolve(&self, from: &S, event: &E) -> Rule<S> {
        self.rules
            .get(&(from.clone(), event.clone()))
            .cloned()
            .unwrap_or(Rule::Reject)
    }
}
