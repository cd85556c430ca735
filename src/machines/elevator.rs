//! A three-state elevator.

use crate::builder::MachineBuilder;
use crate::core::StateHistory;
use crate::engine::{Machine, Outcome};
use crate::{action_enum, state_enum};

state_enum! {
    /// Where the cab is headed, if anywhere.
    pub enum ElevatorState {
        Idle,
        MovingUp => "Moving Up",
        MovingDown => "Moving Down",
    }
}

action_enum! {
    /// The three requests an elevator understands.
    pub enum ElevatorAction {
        MoveUp => "move up",
        MoveDown => "move down",
        Stop => "stop",
    }
}

/// An elevator that only starts moving from rest.
///
/// Movement requests while already moving (in either direction) are
/// rejected; `stop` is only meaningful while moving.
///
/// # Example
///
/// ```rust
/// use lockstep::core::State;
/// use lockstep::machines::ElevatorSystem;
///
/// let mut elevator = ElevatorSystem::new();
/// assert_eq!(elevator.state().name(), "Idle");
///
/// assert_eq!(elevator.move_up().message(), "Elevator moving up");
/// assert_eq!(
///     elevator.move_down().message(),
///     "Invalid operation in current state"
/// );
/// assert_eq!(elevator.stop().message(), "Elevator stopped");
/// ```
pub struct ElevatorSystem {
    machine: Machine<ElevatorState, ElevatorAction>,
}

impl ElevatorSystem {
    /// Create an elevator at rest.
    pub fn new() -> Self {
        let machine = MachineBuilder::new()
            .initial(ElevatorState::Idle)
            .rule(
                ElevatorState::Idle,
                ElevatorAction::MoveUp,
                ElevatorState::MovingUp,
                "Elevator moving up",
            )
            .rule(
                ElevatorState::Idle,
                ElevatorAction::MoveDown,
                ElevatorState::MovingDown,
                "Elevator moving down",
            )
            .rule(
                ElevatorState::MovingUp,
                ElevatorAction::Stop,
                ElevatorState::Idle,
                "Elevator stopped",
            )
            .rule(
                ElevatorState::MovingDown,
                ElevatorAction::Stop,
                ElevatorState::Idle,
                "Elevator stopped",
            )
            .build()
            .expect("elevator table is statically valid");

        Self { machine }
    }

    /// Request upward movement.
    pub fn move_up(&mut self) -> Outcome {
        self.machine.apply(ElevatorAction::MoveUp)
    }

    /// Request downward movement.
    pub fn move_down(&mut self) -> Outcome {
        self.machine.apply(ElevatorAction::MoveDown)
    }

    /// Request a stop.
    pub fn stop(&mut self) -> Outcome {
        self.machine.apply(ElevatorAction::Stop)
    }

    /// The elevator's current state.
    pub fn state(&self) -> &ElevatorState {
        self.machine.current_state()
    }

    /// Committed movements, in order.
    pub fn history(&self) -> &StateHistory<ElevatorState> {
        self.machine.history()
    }
}

impl Default for ElevatorSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn initial_state_is_idle() {
        let elevator = ElevatorSystem::new();
        assert_eq!(elevator.state().name(), "Idle");
    }

    #[test]
    fn full_movement_script() {
        let mut elevator = ElevatorSystem::new();

        // Move up from Idle
        let move_up_result = elevator.move_up();
        assert_eq!(move_up_result.message(), "Elevator moving up");
        assert_eq!(elevator.state().name(), "Moving Up");

        // Move up while already moving is rejected
        let invalid_move_up = elevator.move_up();
        assert_eq!(
            invalid_move_up.message(),
            "Invalid operation in current state"
        );
        assert_eq!(elevator.state().name(), "Moving Up");

        // Stop returns to Idle
        let stop_result = elevator.stop();
        assert_eq!(stop_result.message(), "Elevator stopped");
        assert_eq!(elevator.state().name(), "Idle");

        // Move down from Idle
        let move_down_result = elevator.move_down();
        assert_eq!(move_down_result.message(), "Elevator moving down");
        assert_eq!(elevator.state().name(), "Moving Down");

        // Move down while already moving is rejected
        let invalid_move_down = elevator.move_down();
        assert_eq!(
            invalid_move_down.message(),
            "Invalid operation in current state"
        );
        assert_eq!(elevator.state().name(), "Moving Down");

        // Stop works from either direction
        let stop_again = elevator.stop();
        assert_eq!(stop_again.message(), "Elevator stopped");
        assert_eq!(elevator.state().name(), "Idle");
    }

    #[test]
    fn cross_direction_requests_are_rejected() {
        let mut elevator = ElevatorSystem::new();

        elevator.move_up();
        assert!(!elevator.move_down().is_accepted());
        assert_eq!(elevator.state(), &ElevatorState::MovingUp);

        elevator.stop();
        elevator.move_down();
        assert!(!elevator.move_up().is_accepted());
        assert_eq!(elevator.state(), &ElevatorState::MovingDown);
    }

    #[test]
    fn stop_while_idle_is_rejected() {
        let mut elevator = ElevatorSystem::new();

        for _ in 0..3 {
            assert!(!elevator.stop().is_accepted());
            assert_eq!(elevator.state(), &ElevatorState::Idle);
        }
        assert!(elevator.history().transitions().is_empty());
    }
}
