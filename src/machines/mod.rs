//! Ready-made domain machines built on the table engine.
//!
//! Each machine declares its own state set, initial state and legal moves,
//! and exposes only the actions meaningful to it. The transition discipline
//! (consult table, commit or keep) is shared; only the tables differ.

mod auth;
mod elevator;
mod traffic;

pub use auth::{SessionAction, SessionState, UserAuthentication};
pub use elevator::{ElevatorAction, ElevatorState, ElevatorSystem};
pub use traffic::{LightAction, LightState, TrafficLight};
