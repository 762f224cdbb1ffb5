//! State transition history tracking.
//!
//! Records every accepted transition a controller performs. Rejected and
//! no-op requests never appear here.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single accepted transition.
///
/// # Example
///
/// ```rust
/// use keystone::core::{State, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Idle,
///     Busy,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Busy => "Busy",
///         }
///     }
/// }
///
/// let transition = StateTransition {
///     from: Phase::Idle,
///     to: Phase::Busy,
///     event: "Start".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.event, "Start");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Name of the event that caused the transition
    pub event: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of accepted transitions, oldest first.
///
/// # Example
///
/// ```rust
/// use keystone::core::{State, StateHistory, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Step { A, B, C }
///
/// impl State for Step {
///     fn name(&self) -> &str {
///         match self {
///             Self::A => "A",
///             Self::B => "B",
///             Self::C => "C",
///         }
///     }
/// }
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition {
///     from: Step::A,
///     to: Step::B,
///     event: "next".to_string(),
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: Step::B,
///     to: Step::C,
///     event: "next".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&Step::A, &Step::B, &Step::C]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition.
    pub fn record(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Drop the oldest transitions until at most `limit` remain.
    pub fn retain_latest(&mut self, limit: usize) {
        if self.transitions.len() > limit {
            let excess = self.transitions.len() - limit;
            self.transitions.drain(..excess);
        }
    }

    /// Get the path of states traversed.
    ///
    /// The first element is the `from` state of the oldest retained
    /// transition, followed by the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last retained transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }
    }

    fn transition(from: TestState, to: TestState) -> StateTransition<TestState> {
        StateTransition {
            from,
            to,
            event: "advance".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut history = StateHistory::new();
        history.record(transition(TestState::Initial, TestState::Processing));
        history.record(transition(TestState::Processing, TestState::Complete));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Initial);
        assert_eq!(path[1], &TestState::Processing);
        assert_eq!(path[2], &TestState::Complete);
    }

    #[test]
    fn retain_latest_drops_oldest_entries() {
        let mut history = StateHistory::new();
        history.record(transition(TestState::Initial, TestState::Processing));
        history.record(transition(TestState::Processing, TestState::Complete));
        history.record(transition(TestState::Complete, TestState::Initial));

        history.retain_latest(2);

        assert_eq!(history.len(), 2);
        assert_eq!(history.transitions()[0].from, TestState::Processing);
        assert_eq!(history.last().unwrap().to, TestState::Initial);
    }

    #[test]
    fn retain_latest_is_noop_under_limit() {
        let mut history = StateHistory::new();
        history.record(transition(TestState::Initial, TestState::Processing));

        history.retain_latest(5);

        assert_eq!(history.len(), 1);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = StateHistory::new();
        history.record(transition(TestState::Initial, TestState::Processing));

        std::thread::sleep(std::time::Duration::from_millis(10));

        history.record(transition(TestState::Processing, TestState::Complete));

        let duration = history.duration().unwrap();
        assert!(duration >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let mut history = StateHistory::new();
        history.record(transition(TestState::Initial, TestState::Processing));

        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::new();
        history.record(transition(TestState::Initial, TestState::Processing));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
