//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional settings file (TOML)
//!     → loader.rs (parse & deserialize)
//!     + command-line flags (target, credentials, recipient, interval)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//!     → handed to the prober, notifier and monitor at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal settings files
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::LogFormat;
pub use schema::MailgunConfig;
pub use schema::MonitorConfig;
pub use schema::ObservabilityConfig;
pub use schema::TargetConfig;
