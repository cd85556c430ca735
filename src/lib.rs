//! Lockstep: table-driven state machines with a guarded transfer core
//!
//! Lockstep follows a "pure core, imperative shell" design. Transition logic
//! is a pure function of (state, action) over a table that is fixed when a
//! machine is built; the `Machine` shell is the only place a new state is
//! committed, and the banking core is the only place balances are mutated.
//!
//! # Core Concepts
//!
//! - **State / Action**: type-safe enumerations via the `State` and `Action`
//!   traits
//! - **Transition table**: the full set of legal moves, evaluated purely
//! - **Outcome**: a uniform accepted/rejected result; an illegal action is a
//!   reportable outcome, never an error
//! - **Guarded transfers**: authenticated, type-checked, balance-checked
//!   account mutations committed atomically
//!
//! # Example
//!
//! ```rust
//! use lockstep::core::State;
//! use lockstep::machines::TrafficLight;
//!
//! let mut light = TrafficLight::new();
//! assert_eq!(light.state().name(), "Red");
//!
//! let outcome = light.advance();
//! assert!(outcome.is_accepted());
//! assert_eq!(light.state().name(), "Green");
//! ```

pub mod bank;
pub mod builder;
pub mod core;
pub mod engine;
pub mod env;
pub mod machines;

// Re-export commonly used types
pub use bank::{BankingSystem, Ledger, LedgerError, SessionGate, TransferKind};
pub use builder::{BuildError, MachineBuilder, RuleBuilder};
pub use core::{
    Action, Decision, Guard, Rule, State, StateHistory, TransitionRecord, TransitionTable,
};
pub use engine::{Machine, Outcome};
