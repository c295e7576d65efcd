//! Command-line interface.
//!
//! Flags carry everything the monitor needs to run; the optional settings
//! file only adds tuning knobs on top.

use clap::Parser;
use std::path::PathBuf;

use crate::config::loader::{finalize, load_settings};
use crate::config::{ConfigError, MonitorConfig};

#[derive(Debug, Parser)]
#[command(name = "api-monitor")]
#[command(version, about = "Monitor an API and send alerts on status change.", long_about = None)]
pub struct Cli {
    /// The URL of the API to monitor.
    #[arg(short, long)]
    pub url: String,

    /// Time in seconds between checks.
    #[arg(short, long, default_value_t = 60)]
    pub sleep: u64,

    /// Username for API.
    #[arg(long)]
    pub username: String,

    /// Password for API.
    #[arg(long)]
    pub password: String,

    /// Mailgun API key.
    #[arg(long = "mailgun_api_key")]
    pub mailgun_api_key: String,

    /// Mailgun domain.
    #[arg(long = "mailgun_domain")]
    pub mailgun_domain: String,

    /// Email to send alerts to.
    #[arg(long = "email_to")]
    pub email_to: String,

    /// Optional TOML settings file (timeouts, Mailgun region, logging, metrics).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merge flags over the settings file and validate the result.
    pub fn into_config(self) -> Result<MonitorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_settings(path)?,
            None => MonitorConfig::default(),
        };

        config.target.url = self.url;
        config.target.username = self.username;
        config.target.password = self.password;
        config.mailgun.api_key = self.mailgun_api_key;
        config.mailgun.domain = self.mailgun_domain;
        config.mailgun.email_to = self.email_to;
        config.interval_secs = self.sleep;

        finalize(config)
    }
}
