//! State controller that applies a transition table to incoming events.

use crate::config::ControllerConfig;
use crate::core::{Event, State, StateHistory, StateTransition};
use crate::machine::outcome::Outcome;
use crate::machine::table::{Rule, TransitionTable};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use tracing::{debug, info};

/// Counters kept by a controller over its lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerStats {
    /// Events passed to `handle`
    pub handled: usize,
    /// Events that changed the state
    pub entered: usize,
    /// Events the table refused
    pub rejected: usize,
}

/// Holds the current state and moves it according to a [`TransitionTable`].
///
/// The controller is single-threaded: `handle` takes `&mut self`, so the
/// owner serializes every transition request.
pub struct StateController<S, E, T>
where
    S: State,
    E: Event,
    T: TransitionTable<S, E>,
{
    initial: S,
    current: S,
    table: T,
    history: StateHistory<S>,
    stats: ControllerStats,
    config: ControllerConfig,
    _event: PhantomData<fn(&E)>,
}

impl<S, E, T> StateController<S, E, T>
where
    S: State,
    E: Event,
    T: TransitionTable<S, E>,
{
    /// Create a controller in `initial` with the default config.
    pub fn new(initial: S, table: T) -> Self {
        Self::with_config(initial, table, ControllerConfig::default())
    }

    /// Create a controller in `initial` with `config`.
    ///
    /// A zero history limit is treated as unlimited; see
    /// [`ControllerConfig::normalized`].
    pub fn with_config(initial: S, table: T, config: ControllerConfig) -> Self {
        let config = config.normalized();
        info!(state = initial.name(), "Controller starting");
        Self {
            initial: initial.clone(),
            current: initial,
            table,
            history: StateHistory::new(),
            stats: ControllerStats::default(),
            config,
            _event: PhantomData,
        }
    }

    /// Rebuild a controller from previously captured parts.
    pub(crate) fn from_parts(
        initial: S,
        current: S,
        table: T,
        history: StateHistory<S>,
        stats: ControllerStats,
        config: ControllerConfig,
    ) -> Self {
        Self {
            initial,
            current,
            table,
            history,
            stats,
            config,
            _event: PhantomData,
        }
    }

    /// Apply `event` to the current state.
    ///
    /// Permitted events replace the current state and are recorded in the
    /// history. Events naming the current state, and events the table
    /// rejects, leave the state untouched.
    pub fn handle(&mut self, event: E) -> Outcome<S, E> {
        self.stats.handled += 1;

        match self.table.resolve(&self.current, &event) {
            Rule::Enter(next) => {
                let from = std::mem::replace(&mut self.current, next.clone());
                info!(
                    from = from.name(),
                    to = next.name(),
                    event = event.name(),
                    "Entered state"
                );
                self.record(from.clone(), next.clone(), &event);
                self.stats.entered += 1;
                Outcome::Entered { from, to: next }
            }
            Rule::Stay => {
                debug!(state = self.current.name(), event = event.name(), "Already in state");
                Outcome::Unchanged(self.current.clone())
            }
            Rule::Reject => {
                self.stats.rejected += 1;
                if self.config.log_rejections {
                    info!(
                        state = self.current.name(),
                        event = event.name(),
                        "Transition not allowed"
                    );
                } else {
                    debug!(
                        state = self.current.name(),
                        event = event.name(),
                        "Transition not allowed"
                    );
                }
                Outcome::Rejected {
                    state: self.current.clone(),
                    event,
                }
            }
        }
    }

    /// Check whether `event` would change the state, without applying it.
    pub fn can_handle(&self, event: &E) -> bool {
        matches!(self.table.resolve(&self.current, event), Rule::Enter(_))
    }

    fn record(&mut self, from: S, to: S, event: &E) {
        self.history.record(StateTransition {
            from,
            to,
            event: event.name().to_string(),
            timestamp: Utc::now(),
        });
        if let Some(limit) = self.config.history_limit {
            self.history.retain_latest(limit);
        }
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    pub fn stats(&self) -> ControllerStats {
        self.stats
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Consume the controller, returning its table.
    pub fn into_table(self) -> T {
        self.table
    }
}
