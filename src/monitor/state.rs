//! Endpoint status state machine.
//!
//! # States
//! - Up: last completed check succeeded (also the assumed initial state)
//! - Down: last completed check failed
//!
//! # State Transitions
//! ```text
//! Up   → Down: check returned Down  (alert)
//! Down → Up:   check returned Up    (recovery)
//! otherwise:   no change, no alert
//! ```

use crate::notify::Alert;
use crate::probe::Status;

pub const DOWN_SUBJECT: &str = "API Status Alert";
pub const DOWN_BODY: &str = "The API is down.";
pub const RECOVERY_SUBJECT: &str = "API Status Recovery";
pub const RECOVERY_BODY: &str = "The API is back up.";

/// A change of status between two consecutive checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Up → Down.
    Down,
    /// Down → Up.
    Recovery,
}

impl Transition {
    /// Alert announcing this transition.
    pub fn alert(&self) -> Alert {
        match self {
            Transition::Down => Alert::new(DOWN_SUBJECT, DOWN_BODY),
            Transition::Recovery => Alert::new(RECOVERY_SUBJECT, RECOVERY_BODY),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Transition::Down => "down",
            Transition::Recovery => "recovery",
        }
    }
}

/// Last known status of the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorState {
    current_status: Status,
}

impl MonitorState {
    /// Start in `Up`; the first real check only happens once the loop runs.
    pub fn new() -> Self {
        Self {
            current_status: Status::Up,
        }
    }

    pub fn current(&self) -> Status {
        self.current_status
    }

    /// Record the result of a completed check.
    ///
    /// Returns the transition if the status changed.
    pub fn observe(&mut self, new_status: Status) -> Option<Transition> {
        let transition = match (self.current_status, new_status) {
            (Status::Up, Status::Down) => Transition::Down,
            (Status::Down, Status::Up) => Transition::Recovery,
            _ => return None,
        };
        self.current_status = new_status;
        Some(transition)
    }
}

impl Default for MonitorState {
    fn default() -> Self {
        Self::new()
    }
}
