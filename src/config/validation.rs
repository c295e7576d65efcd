//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (interval > 0, timeout > 0)
//! - Reject empty credentials and malformed addresses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MonitorConfig → Result<(), Vec<ValidationError>>
//! - Runs before the monitor loop starts

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::MonitorConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Missing(&'static str),

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("invalid target URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid recipient address '{0}'")]
    InvalidRecipient(String),

    #[error("invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),
}

/// Check a fully assembled configuration.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.interval_secs == 0 {
        errors.push(ValidationError::NotPositive { field: "interval_secs" });
    }
    if config.target.timeout_secs == 0 {
        errors.push(ValidationError::NotPositive { field: "target.timeout_secs" });
    }

    if config.target.url.is_empty() {
        errors.push(ValidationError::Missing("target.url"));
    } else {
        match Url::parse(&config.target.url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(ValidationError::InvalidUrl {
                url: config.target.url.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }),
            Err(e) => errors.push(ValidationError::InvalidUrl {
                url: config.target.url.clone(),
                reason: e.to_string(),
            }),
        }
    }

    let required = [
        ("target.username", &config.target.username),
        ("target.password", &config.target.password),
        ("mailgun.api_key", &config.mailgun.api_key),
        ("mailgun.domain", &config.mailgun.domain),
        ("mailgun.base_url", &config.mailgun.base_url),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.push(ValidationError::Missing(field));
        }
    }

    let to = config.mailgun.email_to.trim();
    if to.is_empty() {
        errors.push(ValidationError::Missing("mailgun.email_to"));
    } else if !to.contains('@') {
        errors.push(ValidationError::InvalidRecipient(to.to_string()));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
