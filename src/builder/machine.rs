//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::rule::RuleBuilder;
use crate::core::{Action, Rule, State, TransitionTable};
use crate::engine::Machine;

/// Builder for constructing machines with a fluent API.
///
/// `build` is the loud-failure channel for construction mistakes: a missing
/// initial state, an empty rule set, or a rule that can never fire because
/// an earlier unguarded rule already covers its (state, action) pair all
/// return a [`BuildError`] instead of producing a machine that would
/// misbehave at runtime.
pub struct MachineBuilder<S: State, A: Action> {
    initial: Option<S>,
    rules: Vec<Rule<S, A>>,
}

impl<S: State, A: Action> MachineBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            rules: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add an unguarded rule with a confirmation note.
    pub fn rule(mut self, from: S, on: A, to: S, note: impl Into<String>) -> Self {
        self.rules.push(Rule {
            from,
            on,
            to,
            note: note.into(),
            guard: None,
        });
        self
    }

    /// Add a rule using a builder.
    /// Returns an error if the builder fails validation.
    pub fn rule_with(mut self, builder: RuleBuilder<S, A>) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        self.rules.push(rule);
        Ok(self)
    }

    /// Add a pre-built rule.
    pub fn add_rule(mut self, rule: Rule<S, A>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add multiple rules at once.
    pub fn rules(mut self, rules: Vec<Rule<S, A>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing or a rule is
    /// unreachable.
    pub fn build(self) -> Result<Machine<S, A>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.rules.is_empty() {
            return Err(BuildError::NoRules);
        }

        // An unguarded rule answers its pair unconditionally; any later rule
        // for the same pair could never fire.
        for (i, rule) in self.rules.iter().enumerate() {
            let shadowed = self.rules[..i].iter().any(|earlier| {
                earlier.from == rule.from && earlier.on == rule.on && earlier.guard.is_none()
            });
            if shadowed {
                return Err(BuildError::ShadowedRule {
                    state: rule.from.name().to_string(),
                    action: rule.on.name().to_string(),
                });
            }
        }

        Ok(Machine::new(initial, TransitionTable::new(self.rules)))
    }
}

impl<S: State, A: Action> Default for MachineBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
