//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for creating machines
//! with minimal boilerplate while keeping construction mistakes loud:
//! invalid tables are refused at build time, never discovered mid-run.

pub mod error;
pub mod machine;
pub mod macros;
pub mod rule;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use rule::RuleBuilder;

use crate::core::{Action, Rule, State};

/// Create a simple unguarded rule.
///
/// # Example
///
/// ```
/// use lockstep::builder::rule;
/// use lockstep::{action_enum, state_enum};
///
/// state_enum! {
///     enum Belt {
///         Stopped,
///         Running,
///     }
/// }
///
/// action_enum! {
///     enum BeltAction {
///         Start,
///     }
/// }
///
/// let r = rule(Belt::Stopped, BeltAction::Start, Belt::Running, "Belt running");
/// assert_eq!(r.note, "Belt running");
/// ```
pub fn rule<S, A>(from: S, on: A, to: S, note: impl Into<String>) -> Rule<S, A>
where
    S: State,
    A: Action,
{
    Rule {
        from,
        on,
        to,
        note: note.into(),
        guard: None,
    }
}

/// Create a rule with a guard predicate.
///
/// # Example
///
/// ```
/// use lockstep::builder::guarded_rule;
/// use lockstep::core::State;
/// use lockstep::{action_enum, state_enum};
///
/// state_enum! {
///     enum Belt {
///         Stopped,
///         Running,
///         Scrapped,
///     }
///     final: [Scrapped]
/// }
///
/// action_enum! {
///     enum BeltAction {
///         Start,
///     }
/// }
///
/// let r = guarded_rule(
///     Belt::Stopped,
///     BeltAction::Start,
///     Belt::Running,
///     "Belt running",
///     |s: &Belt| !s.is_final(),
/// );
/// assert!(r.matches(&Belt::Stopped, &BeltAction::Start));
/// ```
pub fn guarded_rule<S, A, F>(from: S, on: A, to: S, note: impl Into<String>, guard: F) -> Rule<S, A>
where
    S: State,
    A: Action,
    F: Fn(&S) -> bool + Send + Sync + 'static,
{
    Rule {
        from,
        on,
        to,
        note: note.into(),
        guard: Some(crate::core::Guard::new(guard)),
    }
}
