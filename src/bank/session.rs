//! Session tracking with pluggable credential verification.

use std::collections::HashSet;
use std::fmt;

/// Tracks which principals currently hold an authenticated session.
///
/// Credential rules are not the gate's business: it is constructed with a
/// verification predicate and records only pass/fail. The record is a set
/// keyed by principal, so any number of principals can be authenticated at
/// once; sessions do not expire.
///
/// # Example
///
/// ```rust
/// use lockstep::bank::SessionGate;
///
/// let mut gate = SessionGate::new(|principal, credential| {
///     principal == "user123" && credential == "pass123"
/// });
///
/// assert!(gate.authenticate("user123", "pass123"));
/// assert!(gate.is_authenticated("user123"));
///
/// assert!(!gate.authenticate("user123", "wrong"));
/// assert!(!gate.is_authenticated("intruder"));
/// ```
pub struct SessionGate {
    verify: Box<dyn Fn(&str, &str) -> bool + Send + Sync>,
    active: HashSet<String>,
}

impl SessionGate {
    /// Create a gate with the given credential predicate.
    ///
    /// The predicate must be pure and thread-safe; it is consulted once per
    /// authentication attempt.
    pub fn new<F>(verify: F) -> Self
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        Self {
            verify: Box::new(verify),
            active: HashSet::new(),
        }
    }

    /// Try to authenticate a principal.
    ///
    /// On success the principal is recorded as authenticated and `true` is
    /// returned; on failure the record is untouched. Re-authenticating an
    /// already-authenticated principal succeeds and changes nothing.
    pub fn authenticate(&mut self, principal: &str, credential: &str) -> bool {
        if (self.verify)(principal, credential) {
            self.active.insert(principal.to_string());
            true
        } else {
            false
        }
    }

    /// Whether a principal currently holds an authenticated session.
    pub fn is_authenticated(&self, principal: &str) -> bool {
        self.active.contains(principal)
    }

    /// Drop a principal's session, if any. Returns whether one existed.
    pub fn revoke(&mut self, principal: &str) -> bool {
        self.active.remove(principal)
    }
}

impl fmt::Debug for SessionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionGate")
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> SessionGate {
        SessionGate::new(|_, credential| credential == "pass123")
    }

    #[test]
    fn matching_credential_authenticates() {
        let mut gate = gate();

        assert!(gate.authenticate("user123", "pass123"));
        assert!(gate.is_authenticated("user123"));
    }

    #[test]
    fn wrong_credential_is_refused() {
        let mut gate = gate();

        assert!(!gate.authenticate("user123", "hunter2"));
        assert!(!gate.is_authenticated("user123"));
    }

    #[test]
    fn unknown_principal_is_not_authenticated() {
        let gate = gate();
        assert!(!gate.is_authenticated("unknown_user"));
    }

    #[test]
    fn multiple_principals_hold_sessions_independently() {
        let mut gate = gate();

        gate.authenticate("alice", "pass123");
        gate.authenticate("bob", "pass123");

        assert!(gate.is_authenticated("alice"));
        assert!(gate.is_authenticated("bob"));

        gate.revoke("alice");
        assert!(!gate.is_authenticated("alice"));
        assert!(gate.is_authenticated("bob"));
    }

    #[test]
    fn reauthentication_is_harmless() {
        let mut gate = gate();

        assert!(gate.authenticate("user123", "pass123"));
        assert!(gate.authenticate("user123", "pass123"));
        assert!(gate.is_authenticated("user123"));
    }

    #[test]
    fn revoke_reports_whether_a_session_existed() {
        let mut gate = gate();

        gate.authenticate("user123", "pass123");
        assert!(gate.revoke("user123"));
        assert!(!gate.revoke("user123"));
    }
}
