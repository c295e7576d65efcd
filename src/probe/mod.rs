//! Availability probing subsystem.
//!
//! # Data Flow
//! ```text
//! Monitor tick
//!     → Prober::check (http.rs: one POST to the target)
//!     → Result<(), ProbeError>
//!     → explicit mapping: Ok → Up, Err → Down
//!     → Status handed back to the monitor
//! ```
//!
//! # Design Decisions
//! - `check` is infallible: transport failures are a status, not an error
//! - Only the probe implementation knows what "success" means
//! - No retries here; the poll interval is the retry

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use http::HttpProber;

/// Health of the monitored endpoint at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Up,
    Down,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Up => "up",
            Status::Down => "down",
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, Status::Up)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a single probe did not succeed.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Could not establish a connection.
    #[error("connection failed: {0}")]
    Connect(String),

    /// No response within the configured timeout.
    #[error("timed out after {0} seconds")]
    Timeout(u64),

    /// The endpoint answered with something other than 200 OK.
    #[error("unexpected status code {0}")]
    Status(u16),

    /// Any other client-side failure (request building, body, TLS).
    #[error("request failed: {0}")]
    Client(String),
}

/// Performs one availability check against the target.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Check the target once. Never fails: any problem is reported as `Down`.
    async fn check(&self) -> Status;
}

/// Fold a fallible probe outcome into a status.
pub fn status_from(outcome: &Result<(), ProbeError>) -> Status {
    match outcome {
        Ok(()) => Status::Up,
        Err(_) => Status::Down,
    }
}
