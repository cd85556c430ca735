//! A two-state login session.

use crate::builder::MachineBuilder;
use crate::core::StateHistory;
use crate::engine::{Machine, Outcome};
use crate::{action_enum, state_enum};

state_enum! {
    /// Whether the session currently holds an authenticated user.
    pub enum SessionState {
        LoggedOut => "Logged Out",
        LoggedIn => "Logged In",
    }
}

action_enum! {
    /// The two requests a session understands.
    pub enum SessionAction {
        LogIn => "login",
        LogOut => "logout",
    }
}

/// A login session: logging in twice, or out twice, is rejected.
///
/// # Example
///
/// ```rust
/// use lockstep::core::State;
/// use lockstep::machines::UserAuthentication;
///
/// let mut session = UserAuthentication::new();
/// assert_eq!(session.state().name(), "Logged Out");
///
/// assert_eq!(session.login().message(), "Login successful");
/// assert_eq!(
///     session.login().message(),
///     "Invalid operation in current state"
/// );
/// ```
pub struct UserAuthentication {
    machine: Machine<SessionState, SessionAction>,
}

impl UserAuthentication {
    /// Create a session in the logged-out state.
    pub fn new() -> Self {
        let machine = MachineBuilder::new()
            .initial(SessionState::LoggedOut)
            .rule(
                SessionState::LoggedOut,
                SessionAction::LogIn,
                SessionState::LoggedIn,
                "Login successful",
            )
            .rule(
                SessionState::LoggedIn,
                SessionAction::LogOut,
                SessionState::LoggedOut,
                "Logout successful",
            )
            .build()
            .expect("session table is statically valid");

        Self { machine }
    }

    /// Request a login.
    pub fn login(&mut self) -> Outcome {
        self.machine.apply(SessionAction::LogIn)
    }

    /// Request a logout.
    pub fn logout(&mut self) -> Outcome {
        self.machine.apply(SessionAction::LogOut)
    }

    /// The session's current state.
    pub fn state(&self) -> &SessionState {
        self.machine.current_state()
    }

    /// Committed logins and logouts, in order.
    pub fn history(&self) -> &StateHistory<SessionState> {
        self.machine.history()
    }
}

impl Default for UserAuthentication {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn initial_state_is_logged_out() {
        let session = UserAuthentication::new();
        assert_eq!(session.state().name(), "Logged Out");
    }

    #[test]
    fn login_and_logout_round_trip() {
        let mut session = UserAuthentication::new();

        // Login from Logged Out succeeds
        let login_result = session.login();
        assert_eq!(login_result.message(), "Login successful");
        assert_eq!(session.state().name(), "Logged In");

        // A second login is rejected, state unchanged
        let invalid_login = session.login();
        assert_eq!(invalid_login.message(), "Invalid operation in current state");
        assert_eq!(session.state().name(), "Logged In");

        // Logout reverses it
        let logout_result = session.logout();
        assert_eq!(logout_result.message(), "Logout successful");
        assert_eq!(session.state().name(), "Logged Out");

        // A second logout is rejected, state unchanged
        let invalid_logout = session.logout();
        assert_eq!(
            invalid_logout.message(),
            "Invalid operation in current state"
        );
        assert_eq!(session.state().name(), "Logged Out");
    }

    #[test]
    fn rejected_login_is_idempotent() {
        let mut session = UserAuthentication::new();
        session.login();

        for _ in 0..4 {
            assert!(!session.login().is_accepted());
            assert_eq!(session.state(), &SessionState::LoggedIn);
        }
        // Only the single successful login was committed
        assert_eq!(session.history().transitions().len(), 1);
    }

    #[test]
    fn rejected_logout_is_idempotent() {
        let mut session = UserAuthentication::new();

        for _ in 0..4 {
            assert!(!session.logout().is_accepted());
            assert_eq!(session.state(), &SessionState::LoggedOut);
        }
        assert!(session.history().transitions().is_empty());
    }
}
