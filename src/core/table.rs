//! Transition tables and their pure evaluator.
//!
//! A transition table is the complete set of legal moves for a machine,
//! fixed at construction. Evaluating an action against the table is a pure
//! function of (state, action): it decides, it never commits. The caller is
//! responsible for adopting the decided state (see
//! [`crate::engine::Machine`]).

use super::action::Action;
use super::guard::Guard;
use super::state::State;

/// A single legal move: from one state, on one action, to a next state.
///
/// The `note` is the confirmation message callers observe when this rule
/// fires (e.g. `"Login successful"`). The optional guard adds a pure
/// precondition on top of the state/action match.
#[derive(Clone, Debug)]
pub struct Rule<S: State, A: Action> {
    /// State this rule applies in
    pub from: S,
    /// Action this rule responds to
    pub on: A,
    /// State the machine moves to when the rule fires
    pub to: S,
    /// Confirmation message reported on acceptance
    pub note: String,
    /// Optional precondition checked against the current state
    pub guard: Option<Guard<S>>,
}

impl<S: State, A: Action> Rule<S, A> {
    /// Check whether this rule applies to the given state and action (pure).
    pub fn matches(&self, current: &S, action: &A) -> bool {
        if self.from != *current || self.on != *action {
            return false;
        }

        // Check guard if present (pure predicate)
        self.guard.as_ref().is_none_or(|g| g.check(current))
    }
}

/// The decision a table returns for one (state, action) pair.
///
/// `Reject` is a normal, reportable outcome: probing a machine with an
/// action that is illegal in its current state is expected caller behavior,
/// not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Decision<'a, S: State> {
    /// A rule fired: the machine may adopt `next` and report `note`.
    Accept {
        /// The state to commit
        next: S,
        /// The firing rule's confirmation message
        note: &'a str,
    },
    /// No rule fired: the current state must be kept unchanged.
    Reject,
}

/// Fixed mapping from (state, action) to a next state.
///
/// The table never changes after construction; there are no mutators. Pairs
/// with no rule (or whose rule's guard fails) are rejected. Rules are
/// evaluated in insertion order and the first match wins; the builder
/// refuses tables where two rules compete for the same pair (see
/// [`crate::builder::MachineBuilder`]).
///
/// # Example
///
/// ```rust
/// use lockstep::core::{Action, Decision, Rule, State, TransitionTable};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Shut;
///
/// impl Action for Shut {
///     fn name(&self) -> &str {
///         "shut"
///     }
/// }
///
/// let table = TransitionTable::new(vec![Rule {
///     from: Door::Open,
///     on: Shut,
///     to: Door::Closed,
///     note: "Door closed".to_string(),
///     guard: None,
/// }]);
///
/// // Legal pair: accepted with the rule's note
/// match table.decide(&Door::Open, &Shut) {
///     Decision::Accept { next, note } => {
///         assert_eq!(next, Door::Closed);
///         assert_eq!(note, "Door closed");
///     }
///     Decision::Reject => unreachable!(),
/// }
///
/// // Absent pair: rejected
/// assert_eq!(table.decide(&Door::Closed, &Shut), Decision::Reject);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, A: Action> {
    rules: Vec<Rule<S, A>>,
}

impl<S: State, A: Action> TransitionTable<S, A> {
    /// Create a table from a fixed set of rules.
    pub fn new(rules: Vec<Rule<S, A>>) -> Self {
        Self { rules }
    }

    /// Decide what the given action means in the given state (pure).
    ///
    /// Returns `Accept` with the next state and confirmation note if a rule
    /// matches, `Reject` otherwise. The current state is never touched; the
    /// caller commits the accepted state or keeps the old one.
    pub fn decide(&self, current: &S, action: &A) -> Decision<'_, S> {
        for rule in &self.rules {
            if rule.matches(current, action) {
                return Decision::Accept {
                    next: rule.to.clone(),
                    note: &rule.note,
                };
            }
        }
        Decision::Reject
    }

    /// All rules, in evaluation order.
    pub fn rules(&self) -> &[Rule<S, A>] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Phase {
        Ready,
        Working,
        Done,
    }

    impl State for Phase {
        fn name(&self) -> &str {
            match self {
                Self::Ready => "Ready",
                Self::Working => "Working",
                Self::Done => "Done",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Done)
        }
    }

    #[derive(Clone, PartialEq, Debug)]
    enum Cmd {
        Begin,
        Finish,
    }

    impl Action for Cmd {
        fn name(&self) -> &str {
            match self {
                Self::Begin => "begin",
                Self::Finish => "finish",
            }
        }
    }

    fn table() -> TransitionTable<Phase, Cmd> {
        TransitionTable::new(vec![
            Rule {
                from: Phase::Ready,
                on: Cmd::Begin,
                to: Phase::Working,
                note: "Work started".to_string(),
                guard: None,
            },
            Rule {
                from: Phase::Working,
                on: Cmd::Finish,
                to: Phase::Done,
                note: "Work finished".to_string(),
                guard: None,
            },
        ])
    }

    #[test]
    fn decide_accepts_legal_pair() {
        let table = table();

        match table.decide(&Phase::Ready, &Cmd::Begin) {
            Decision::Accept { next, note } => {
                assert_eq!(next, Phase::Working);
                assert_eq!(note, "Work started");
            }
            Decision::Reject => panic!("Expected acceptance"),
        }
    }

    #[test]
    fn decide_rejects_absent_pair() {
        let table = table();

        assert_eq!(table.decide(&Phase::Ready, &Cmd::Finish), Decision::Reject);
        assert_eq!(table.decide(&Phase::Done, &Cmd::Begin), Decision::Reject);
    }

    #[test]
    fn decide_is_pure() {
        let table = table();
        let state = Phase::Ready;

        let first = table.decide(&state, &Cmd::Begin);
        let second = table.decide(&state, &Cmd::Begin);

        assert_eq!(first, second);
        // The probed state is untouched either way
        assert_eq!(state, Phase::Ready);
    }

    #[test]
    fn guard_failure_rejects_like_absent_rule() {
        let table = TransitionTable::new(vec![Rule {
            from: Phase::Ready,
            on: Cmd::Begin,
            to: Phase::Working,
            note: "Work started".to_string(),
            guard: Some(Guard::new(|_: &Phase| false)),
        }]);

        assert_eq!(table.decide(&Phase::Ready, &Cmd::Begin), Decision::Reject);
    }

    #[test]
    fn guard_success_lets_rule_fire() {
        let table = TransitionTable::new(vec![Rule {
            from: Phase::Ready,
            on: Cmd::Begin,
            to: Phase::Working,
            note: "Work started".to_string(),
            guard: Some(Guard::new(|s: &Phase| !s.is_final())),
        }]);

        assert!(matches!(
            table.decide(&Phase::Ready, &Cmd::Begin),
            Decision::Accept { .. }
        ));
    }

    #[test]
    fn first_matching_rule_wins() {
        let table = TransitionTable::new(vec![
            Rule {
                from: Phase::Ready,
                on: Cmd::Begin,
                to: Phase::Working,
                note: "first".to_string(),
                guard: Some(Guard::new(|_: &Phase| false)),
            },
            Rule {
                from: Phase::Ready,
                on: Cmd::Begin,
                to: Phase::Done,
                note: "second".to_string(),
                guard: None,
            },
        ]);

        // Guarded-out rule is skipped; the later rule still applies
        match table.decide(&Phase::Ready, &Cmd::Begin) {
            Decision::Accept { next, note } => {
                assert_eq!(next, Phase::Done);
                assert_eq!(note, "second");
            }
            Decision::Reject => panic!("Expected acceptance"),
        }
    }
}
