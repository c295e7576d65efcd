//! API availability monitor library.

pub mod cli;
pub mod config;
pub mod lifecycle;
pub mod monitor;
pub mod notify;
pub mod observability;
pub mod probe;

pub use config::schema::MonitorConfig;
pub use lifecycle::Shutdown;
pub use monitor::Monitor;
