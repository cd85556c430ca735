//! Uniform result type for machine actions.

use std::fmt;

/// Message reported for every rejected action, in every machine.
///
/// Callers routinely probe machines with actions that are illegal in the
/// current state, so the reply is a stable, uniform string rather than an
/// error.
pub const REJECTION_NOTE: &str = "Invalid operation in current state";

/// Result of applying an action to a machine.
///
/// An accepted action carries the firing rule's confirmation message; a
/// rejected action carries nothing because every rejection reads the same.
/// Rejection is a normal outcome, never a fault: callers branch on it with
/// [`Outcome::is_accepted`] or compare [`Outcome::message`] directly.
///
/// # Example
///
/// ```rust
/// use lockstep::engine::{Outcome, REJECTION_NOTE};
///
/// let ok = Outcome::Accepted("Login successful".to_string());
/// assert!(ok.is_accepted());
/// assert_eq!(ok.message(), "Login successful");
///
/// let no = Outcome::Rejected;
/// assert!(!no.is_accepted());
/// assert_eq!(no.message(), REJECTION_NOTE);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The action was legal; the machine committed the transition.
    Accepted(String),
    /// The action was illegal in the current state; nothing changed.
    Rejected,
}

impl Outcome {
    /// Whether the action was accepted and committed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The caller-visible message for this outcome.
    pub fn message(&self) -> &str {
        match self {
            Self::Accepted(note) => note,
            Self::Rejected => REJECTION_NOTE,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_reports_its_note() {
        let outcome = Outcome::Accepted("Elevator moving up".to_string());

        assert!(outcome.is_accepted());
        assert_eq!(outcome.message(), "Elevator moving up");
        assert_eq!(outcome.to_string(), "Elevator moving up");
    }

    #[test]
    fn rejected_reports_the_uniform_note() {
        let outcome = Outcome::Rejected;

        assert!(!outcome.is_accepted());
        assert_eq!(outcome.message(), "Invalid operation in current state");
        assert_eq!(outcome.to_string(), REJECTION_NOTE);
    }
}
