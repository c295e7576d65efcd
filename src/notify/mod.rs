//! Alert delivery subsystem.
//!
//! # Data Flow
//! ```text
//! Monitor detects a transition
//!     → Alert (subject + body)
//!     → Notifier::send (mailgun.rs: one POST to the Mailgun API)
//!     → Result<(), DeliveryError>
//!     → monitor logs failures and carries on
//! ```
//!
//! # Design Decisions
//! - Best effort: one attempt per alert, no retry queue
//! - Delivery errors are returned, not panicked; the caller decides to swallow them
//! - Exactly one sink per process

pub mod mailgun;

use async_trait::async_trait;
use thiserror::Error;

pub use mailgun::MailgunNotifier;

/// A message for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub subject: String,
    pub body: String,
}

impl Alert {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Errors that can occur while delivering an alert.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The HTTP request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The delivery service answered with a non-success status.
    #[error("delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Delivers alerts to the configured recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, alert: &Alert) -> Result<(), DeliveryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DeliveryError::Rejected {
            status: 401,
            body: "Forbidden".into(),
        };
        assert_eq!(err.to_string(), "delivery rejected with status 401: Forbidden");
    }
}
