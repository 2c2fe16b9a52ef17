// ============================================================================
// LOGIN STATE - Credential entry + verification progress
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::viewmodels::BiometricTimer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginPhase {
    CredentialEntry,
    VerifyingLocation,
    VerifyingIdentity,
}

#[derive(Clone)]
pub struct LoginState {
    /// Sanitized credential digits
    pub input: Rc<RefCell<String>>,
    pub phase: Rc<Cell<LoginPhase>>,
    pub error: Rc<RefCell<Option<String>>>,
    pub location_verified: Rc<Cell<bool>>,
    /// 0..=100
    pub progress: Rc<Cell<u8>>,
    /// Bumped on every submit and dispose; stale location answers compare against it
    pub attempt: Rc<Cell<u64>>,
    pub timer: Rc<RefCell<Option<BiometricTimer>>>,
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            input: Rc::new(RefCell::new(String::new())),
            phase: Rc::new(Cell::new(LoginPhase::CredentialEntry)),
            error: Rc::new(RefCell::new(None)),
            location_verified: Rc::new(Cell::new(false)),
            progress: Rc::new(Cell::new(0)),
            attempt: Rc::new(Cell::new(0)),
            timer: Rc::new(RefCell::new(None)),
        }
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase.get()
    }

    pub fn input(&self) -> String {
        self.input.borrow().clone()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn progress(&self) -> u8 {
        self.progress.get()
    }

    pub fn is_verifying(&self) -> bool {
        self.phase() != LoginPhase::CredentialEntry
    }

    /// Start a new attempt and return its number
    pub fn next_attempt(&self) -> u64 {
        let next = self.attempt.get() + 1;
        self.attempt.set(next);
        next
    }

    pub fn is_current(&self, attempt: u64) -> bool {
        self.attempt.get() == attempt
    }

    /// Line under the fingerprint while verifying
    pub fn status_message(&self) -> &'static str {
        match self.phase() {
            LoginPhase::CredentialEntry => "",
            LoginPhase::VerifyingLocation => "Verifying location...",
            LoginPhase::VerifyingIdentity => "Verifying identity...",
        }
    }

    /// Back to credential entry, optionally with an inline message
    pub fn reset_to_entry(&self, error: Option<String>) {
        let timer = self.timer.borrow_mut().take();
        drop(timer);
        self.phase.set(LoginPhase::CredentialEntry);
        self.location_verified.set(false);
        self.progress.set(0);
        *self.error.borrow_mut() = error;
    }
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_follows_phase() {
        let login = LoginState::new();
        assert_eq!(login.status_message(), "");

        login.phase.set(LoginPhase::VerifyingLocation);
        assert_eq!(login.status_message(), "Verifying location...");

        login.phase.set(LoginPhase::VerifyingIdentity);
        login.progress.set(40);
        assert_eq!(login.status_message(), "Verifying identity...");
        login.progress.set(100);
        assert_eq!(login.status_message(), "Verifying identity...");
    }

    #[test]
    fn test_reset_clears_progress_keeps_input() {
        let login = LoginState::new();
        *login.input.borrow_mut() = "123".into();
        login.phase.set(LoginPhase::VerifyingIdentity);
        login.progress.set(50);
        login.location_verified.set(true);

        login.reset_to_entry(Some("nope".into()));

        assert_eq!(login.phase(), LoginPhase::CredentialEntry);
        assert_eq!(login.progress(), 0);
        assert!(!login.location_verified.get());
        assert_eq!(login.error().as_deref(), Some("nope"));
        assert_eq!(login.input(), "123");
    }

    #[test]
    fn test_attempts_supersede() {
        let login = LoginState::new();
        let first = login.next_attempt();
        let second = login.next_attempt();
        assert!(!login.is_current(first));
        assert!(login.is_current(second));
    }
}
