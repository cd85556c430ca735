//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that determine whether a transition
//! rule applies. They encode preconditions declaratively, without side
//! effects.

use super::state::State;
use std::sync::Arc;

/// Pure predicate that determines if a transition rule may fire.
///
/// A guard is evaluated against the current state while a transition table
/// looks for a matching rule. A rule whose guard returns `false` is treated
/// exactly like an absent rule: the action is rejected.
///
/// # Example
///
/// ```rust
/// use lockstep::core::{Guard, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///             Self::Complete => "Complete",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Complete)
///     }
/// }
///
/// // Guard that only allows transitions from non-final states
/// let can_transition = Guard::new(|state: &TaskState| !state.is_final());
///
/// assert!(can_transition.check(&TaskState::Pending));
/// assert!(can_transition.check(&TaskState::Running));
/// assert!(!can_transition.check(&TaskState::Complete));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows a transition from this state.
    ///
    /// Pure: evaluates the predicate without any side effects.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S: State> std::fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Guard(..)")
    }
}
