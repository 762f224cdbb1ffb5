//! Builder for data-driven rule tables.

use crate::builder::error::BuildError;
use crate::core::{Event, State};
use crate::machine::{Rule, RuleTable};
use std::collections::HashMap;

/// Builder for [`RuleTable`] with a fluent API.
///
/// Declaring the same (state, event) pair twice with the same rule is
/// harmless; declaring it with two different rules fails the build.
pub struct RuleTableBuilder<S: State, E: Event> {
    declared: Vec<(S, E, Rule<S>)>,
}

impl<S: State, E: Event> RuleTableBuilder<S, E> {
    pub fn new() -> Self {
        Self {
            declared: Vec::new(),
        }
    }

    /// Permit `event` to move the controller from `from` to `to`.
    pub fn allow(mut self, from: S, event: E, to: S) -> Self {
        self.declared.push((from, event, Rule::Enter(to)));
        self
    }

    /// Declare that `event` in `state` is a no-op rather than a rejection.
    pub fn stay(mut self, state: S, event: E) -> Self {
        self.declared.push((state, event, Rule::Stay));
        self
    }

    /// Explicitly reject `event` in `state`.
    ///
    /// Undeclared pairs are rejected anyway; this exists so tables can spell
    /// out every pair and still detect contradictions.
    pub fn reject(mut self, state: S, event: E) -> Self {
        self.declared.push((state, event, Rule::Reject));
        self
    }

    pub fn build(self) -> Result<RuleTable<S, E>, BuildError> {
        if self.declared.is_empty() {
            return Err(BuildError::NoRules);
        }

        let mut rules: HashMap<(S, E), Rule<S>> = HashMap::with_capacity(self.declared.len());
        for (from, event, rule) in self.declared {
            if let Some(existing) = rules.get(&(from.clone(), event.clone())) {
                if *existing != rule {
                    return Err(BuildError::ConflictingRule {
                        from: from.name().to_string(),
                        event: event.name().to_string(),
                        existing: describe(existing),
                        requested: describe(&rule),
                    });
                }
                continue;
            }
            rules.insert((from, event), rule);
        }

        Ok(RuleTable { rules })
    }
}

impl<S: State, E: Event> Default for RuleTableBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

fn describe<S: State>(rule: &Rule<S>) -> String {
    match rule {
        Rule::Enter(to) => format!("enter {}", to.name()),
        Rule::Stay => "stay".to_string(),
        Rule::Reject => "reject".to_string(),
    }
}
