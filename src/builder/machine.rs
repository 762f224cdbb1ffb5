//! Builder for constructing state controllers.

use crate::builder::error::BuildError;
use crate::config::ControllerConfig;
use crate::core::{Event, State};
use crate::machine::{StateController, TransitionTable};
use std::marker::PhantomData;

/// Builder for constructing state controllers with a fluent API.
pub struct ControllerBuilder<S: State, E: Event, T: TransitionTable<S, E>> {
    initial: Option<S>,
    table: Option<T>,
    config: ControllerConfig,
    _event: PhantomData<fn(&E)>,
}

impl<S: State, E: Event, T: TransitionTable<S, E>> ControllerBuilder<S, E, T> {
    pub fn new() -> Self {
        Self {
            initial: None,
            table: None,
            config: ControllerConfig::default(),
            _event: PhantomData,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the transition table (required).
    pub fn table(mut self, table: T) -> Self {
        self.table = Some(table);
        self
    }

    pub fn config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Limit the number of transitions kept in history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    /// Build the controller.
    /// Returns an error if required fields are missing or the config is invalid.
    pub fn build(self) -> Result<StateController<S, E, T>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let table = self.table.ok_or(BuildError::MissingTable)?;
        self.config
            .validate()
            .map_err(|e| BuildError::InvalidConfig(e.to_string()))?;

        Ok(StateController::with_config(initial, table, self.config))
    }
}

impl<S: State, E: Event, T: TransitionTable<S, E>> Default for ControllerBuilder<S, E, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RuleTableBuilder;
    use crate::machine::RuleTable;
    use crate::{event_enum, state_enum};

    state_enum! {
        enum Task {
            Pending,
            Running,
            Complete,
        }
        final: [Complete]
    }

    event_enum! {
        enum TaskEvent {
            Run,
            Finish,
        }
    }

    fn task_table() -> RuleTable<Task, TaskEvent> {
        RuleTableBuilder::new()
            .allow(Task::Pending, TaskEvent::Run, Task::Running)
            .allow(Task::Running, TaskEvent::Finish, Task::Complete)
            .build()
            .unwrap()
    }

    #[test]
    fn builder_validates_initial_state() {
        let result = ControllerBuilder::<Task, TaskEvent, RuleTable<Task, TaskEvent>>::new()
            .table(task_table())
            .build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_table() {
        let result = ControllerBuilder::<Task, TaskEvent, RuleTable<Task, TaskEvent>>::new()
            .initial(Task::Pending)
            .build();

        assert!(matches!(result, Err(BuildError::MissingTable)));
    }

    #[test]
    fn builder_rejects_zero_history_limit() {
        let result = ControllerBuilder::<Task, TaskEvent, _>::new()
            .initial(Task::Pending)
            .table(task_table())
            .history_limit(0)
            .build();

        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }

    #[test]
    fn fluent_api_builds_controller() {
        let mut controller = ControllerBuilder::new()
            .initial(Task::Pending)
            .table(task_table())
            .history_limit(8)
            .build()
            .unwrap();

        assert_eq!(controller.current_state(), &Task::Pending);
        assert_eq!(controller.config().history_limit, Some(8));

        controller.handle(TaskEvent::Run);
        controller.handle(TaskEvent::Finish);
        assert!(controller.is_final());
    }
}
