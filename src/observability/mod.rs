//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Probe, notifier and monitor produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters and a status gauge)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → optional Prometheus scrape endpoint
//! ```

pub mod logging;
pub mod metrics;
