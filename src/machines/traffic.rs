//! A cyclic traffic light.

use crate::builder::MachineBuilder;
use crate::core::StateHistory;
use crate::engine::{Machine, Outcome};
use crate::{action_enum, state_enum};

state_enum! {
    /// The three lamp colors. No state is final; the cycle repeats forever.
    pub enum LightState {
        Red,
        Green,
        Yellow,
    }
}

action_enum! {
    /// The single input a light understands.
    pub enum LightAction {
        Advance => "advance",
    }
}

/// A traffic light cycling Red -> Green -> Yellow -> Red.
///
/// Every state accepts `advance`, so this machine never rejects; it exists
/// to exercise the cyclic end of the transition-table spectrum.
///
/// # Example
///
/// ```rust
/// use lockstep::core::State;
/// use lockstep::machines::TrafficLight;
///
/// let mut light = TrafficLight::new();
/// assert_eq!(light.state().name(), "Red");
///
/// light.advance();
/// light.advance();
/// light.advance();
/// assert_eq!(light.state().name(), "Red");
/// ```
pub struct TrafficLight {
    machine: Machine<LightState, LightAction>,
}

impl TrafficLight {
    /// Create a light showing Red.
    pub fn new() -> Self {
        let machine = MachineBuilder::new()
            .initial(LightState::Red)
            .rule(
                LightState::Red,
                LightAction::Advance,
                LightState::Green,
                "Light changed to Green",
            )
            .rule(
                LightState::Green,
                LightAction::Advance,
                LightState::Yellow,
                "Light changed to Yellow",
            )
            .rule(
                LightState::Yellow,
                LightAction::Advance,
                LightState::Red,
                "Light changed to Red",
            )
            .build()
            .expect("traffic light table is statically valid");

        Self { machine }
    }

    /// Move to the next color in the cycle.
    pub fn advance(&mut self) -> Outcome {
        self.machine.apply(LightAction::Advance)
    }

    /// The color currently shown.
    pub fn state(&self) -> &LightState {
        self.machine.current_state()
    }

    /// Committed color changes, in order.
    pub fn history(&self) -> &StateHistory<LightState> {
        self.machine.history()
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}
