//! State machine that commits table decisions.

use crate::core::{Action, Decision, State, StateHistory, TransitionRecord, TransitionTable};
use crate::engine::Outcome;
use chrono::Utc;
use log::debug;

/// A running state machine: current state, its fixed transition table, and
/// the history of committed moves.
///
/// The machine owns its state exclusively. `apply` takes `&mut self`, so the
/// consult-then-commit step is one critical section per instance under
/// Rust's aliasing rules; hosts that share an instance across threads wrap
/// it in a mutex, and distinct instances need no coordination at all.
///
/// # Example
///
/// ```rust
/// use lockstep::builder::MachineBuilder;
/// use lockstep::core::State;
/// use lockstep::state_enum;
///
/// state_enum! {
///     enum Switch {
///         Off,
///         On,
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Toggle;
///
/// impl lockstep::core::Action for Toggle {
///     fn name(&self) -> &str {
///         "toggle"
///     }
/// }
///
/// let mut machine = MachineBuilder::new()
///     .initial(Switch::Off)
///     .rule(Switch::Off, Toggle, Switch::On, "Switched on")
///     .rule(Switch::On, Toggle, Switch::Off, "Switched off")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.apply(Toggle).message(), "Switched on");
/// assert_eq!(machine.current_state().name(), "On");
/// ```
pub struct Machine<S: State, A: Action> {
    current: S,
    table: TransitionTable<S, A>,
    history: StateHistory<S>,
}

impl<S: State, A: Action> Machine<S, A> {
    /// Create a machine in the given initial state.
    ///
    /// Prefer [`crate::builder::MachineBuilder`], which validates the table
    /// before handing one here.
    pub fn new(initial: S, table: TransitionTable<S, A>) -> Self {
        Self {
            current: initial,
            table,
            history: StateHistory::new(),
        }
    }

    /// Get the current state (pure).
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if the machine is in a final state (pure).
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// The machine's transition table (pure).
    pub fn table(&self) -> &TransitionTable<S, A> {
        &self.table
    }

    /// History of committed transitions (pure).
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Apply an action: consult the table, then commit or keep the state.
    ///
    /// An accepted action commits the next state, records it in history,
    /// and returns the rule's confirmation message. A rejected action
    /// changes nothing observable and returns [`Outcome::Rejected`];
    /// repeating a rejected action any number of times keeps returning the
    /// same rejection without side effects.
    pub fn apply(&mut self, action: A) -> Outcome {
        match self.table.decide(&self.current, &action) {
            Decision::Accept { next, note } => {
                let message = note.to_string();
                let record = TransitionRecord {
                    from: self.current.clone(),
                    to: next.clone(),
                    action: action.name().to_string(),
                    timestamp: Utc::now(),
                };
                self.history = self.history.record(record);
                debug!(
                    "commit: '{}' -> '{}' on '{}'",
                    self.current.name(),
                    next.name(),
                    action.name()
                );
                self.current = next;
                Outcome::Accepted(message)
            }
            Decision::Reject => {
                debug!(
                    "reject: '{}' in state '{}'",
                    action.name(),
                    self.current.name()
                );
                Outcome::Rejected
            }
        }
    }
}
