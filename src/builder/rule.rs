//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{Action, Guard, Rule, State};

/// Builder for constructing rules with a fluent API.
///
/// `from`, `on` and `to` are required; the confirmation note defaults to
/// `"<from> -> <to>"` when not given.
pub struct RuleBuilder<S: State, A: Action> {
    from: Option<S>,
    on: Option<A>,
    to: Option<S>,
    note: Option<String>,
    guard: Option<Guard<S>>,
}

impl<S: State, A: Action> RuleBuilder<S, A> {
    /// Create a new rule builder.
    pub fn new() -> Self {
        Self {
            from: None,
            on: None,
            to: None,
            note: None,
            guard: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the action the rule responds to (required).
    pub fn on(mut self, action: A) -> Self {
        self.on = Some(action);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the confirmation note reported on acceptance (optional).
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard<S>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Build the rule.
    pub fn build(self) -> Result<Rule<S, A>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let on = self.on.ok_or(BuildError::MissingAction)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;
        let note = self
            .note
            .unwrap_or_else(|| format!("{} -> {}", from.name(), to.name()));

        Ok(Rule {
            from,
            on,
            to,
            note,
            guard: self.guard,
        })
    }
}

impl<S: State, A: Action> Default for RuleBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Pump {
        Off,
        Running,
    }

    impl State for Pump {
        fn name(&self) -> &str {
            match self {
                Self::Off => "Off",
                Self::Running => "Running",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug)]
    enum PumpAction {
        Start,
    }

    impl Action for PumpAction {
        fn name(&self) -> &str {
            "start"
        }
    }

    #[test]
    fn builder_validates_missing_from() {
        let result = RuleBuilder::<Pump, PumpAction>::new()
            .on(PumpAction::Start)
            .to(Pump::Running)
            .build();

        assert!(matches!(result, Err(BuildError::MissingFromState)));
    }

    #[test]
    fn builder_validates_missing_action() {
        let result = RuleBuilder::<Pump, PumpAction>::new()
            .from(Pump::Off)
            .to(Pump::Running)
            .build();

        assert!(matches!(result, Err(BuildError::MissingAction)));
    }

    #[test]
    fn builder_validates_missing_to() {
        let result = RuleBuilder::<Pump, PumpAction>::new()
            .from(Pump::Off)
            .on(PumpAction::Start)
            .build();

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn note_defaults_to_state_pair() {
        let rule = RuleBuilder::new()
            .from(Pump::Off)
            .on(PumpAction::Start)
            .to(Pump::Running)
            .build()
            .unwrap();

        assert_eq!(rule.note, "Off -> Running");
    }

    #[test]
    fn explicit_note_is_kept() {
        let rule = RuleBuilder::new()
            .from(Pump::Off)
            .on(PumpAction::Start)
            .to(Pump::Running)
            .note("Pump started")
            .build()
            .unwrap();

        assert_eq!(rule.note, "Pump started");
    }

    #[test]
    fn rule_builder_with_guard() {
        let rule = RuleBuilder::new()
            .from(Pump::Off)
            .on(PumpAction::Start)
            .to(Pump::Running)
            .when(|s: &Pump| matches!(s, Pump::Off))
            .build()
            .unwrap();

        assert!(rule.matches(&Pump::Off, &PumpAction::Start));
        assert!(!rule.matches(&Pump::Running, &PumpAction::Start));
    }
}
