//! Build errors for machine and rule builders.

use thiserror::Error;

/// Errors that can occur when building machines and rules.
///
/// These indicate construction mistakes, not runtime conditions, and so
/// fail loudly instead of surfacing as rejected outcomes.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No rules defined. Add at least one rule")]
    NoRules,

    #[error("Rule source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Rule action not specified. Call .on(action)")]
    MissingAction,

    #[error("Rule target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Rule for action '{action}' in state '{state}' is unreachable: an earlier unguarded rule already covers that pair")]
    ShadowedRule { state: String, action: String },
}
