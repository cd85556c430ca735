//! Core Action trait for state machine inputs.
//!
//! Actions are the requests a caller makes of a machine. The transition
//! table decides, per current state, whether a given action is legal.

use std::fmt::Debug;

/// Trait for state machine actions.
///
/// Actions are plain values: they carry no behavior of their own. Whether an
/// action is accepted depends entirely on the current state and the
/// transition table it is evaluated against.
///
/// # Example
///
/// ```rust
/// use lockstep::core::Action;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum DoorAction {
///     Open,
///     Close,
/// }
///
/// impl Action for DoorAction {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "open",
///             Self::Close => "close",
///         }
///     }
/// }
/// ```
pub trait Action: Clone + PartialEq + Debug + Send + Sync {
    /// Get the action's name for display/logging and history records.
    fn name(&self) -> &str;
}
