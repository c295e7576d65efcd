//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the monitor.
//! All types derive Serde traits so the optional settings file can fill in
//! any section; the CLI layer supplies the rest.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Root configuration for the API monitor.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Endpoint being probed.
    pub target: TargetConfig,

    /// Mailgun delivery settings for status alerts.
    pub mailgun: MailgunConfig,

    /// Seconds to wait between consecutive checks.
    pub interval_secs: u64,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            target: TargetConfig::default(),
            mailgun: MailgunConfig::default(),
            interval_secs: 60,
            observability: ObservabilityConfig::default(),
        }
    }
}

impl MonitorConfig {
    /// Poll interval as a `Duration`.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Target endpoint configuration.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetConfig {
    /// URL the check request is posted to.
    pub url: String,

    /// Username sent with the check.
    pub username: String,

    /// Password sent with the check. Never logged.
    pub password: String,

    /// Request timeout in seconds; a hung endpoint counts as down.
    pub timeout_secs: u64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            username: String::new(),
            password: String::new(),
            timeout_secs: 10,
        }
    }
}

impl TargetConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl fmt::Debug for TargetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Mailgun notification configuration.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MailgunConfig {
    /// Mailgun API key. Never logged.
    pub api_key: String,

    /// Sending domain registered with Mailgun.
    pub domain: String,

    /// Alert recipient address.
    pub email_to: String,

    /// API base URL (use `https://api.eu.mailgun.net` for the EU region).
    pub base_url: String,

    /// Display name used in the `From` header.
    pub sender_name: String,
}

impl Default for MailgunConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            domain: String::new(),
            email_to: String::new(),
            base_url: "https://api.mailgun.net".to_string(),
            sender_name: "API Monitor".to_string(),
        }
    }
}

impl fmt::Debug for MailgunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailgunConfig")
            .field("api_key", &"<redacted>")
            .field("domain", &self.domain)
            .field("email_to", &self.email_to)
            .field("base_url", &self.base_url)
            .field("sender_name", &self.sender_name)
            .finish()
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output for terminals.
    #[default]
    Pretty,
    /// One JSON object per line for log aggregation.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
