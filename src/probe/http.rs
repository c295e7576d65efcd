//! HTTP availability probe.
//!
//! # Responsibilities
//! - Post the configured credentials to the target URL
//! - Classify the outcome (200 OK, other status, connect error, timeout)
//! - Report `Up` only for a 200 OK response

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

use crate::config::TargetConfig;
use crate::probe::{status_from, ProbeError, Prober, Status};

pub struct HttpProber {
    client: reqwest::Client,
    url: String,
    username: String,
    password: String,
    timeout: Duration,
}

impl HttpProber {
    pub fn new(config: &TargetConfig) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("api-monitor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProbeError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            timeout: config.timeout(),
        })
    }

    /// Run one request and classify the result.
    pub async fn probe(&self) -> Result<(), ProbeError> {
        let form = [
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ];

        let response = self
            .client
            .post(&self.url)
            .form(&form)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        match response.status() {
            StatusCode::OK => Ok(()),
            other => Err(ProbeError::Status(other.as_u16())),
        }
    }

    fn classify(&self, err: reqwest::Error) -> ProbeError {
        if err.is_timeout() {
            ProbeError::Timeout(self.timeout.as_secs())
        } else if err.is_connect() {
            ProbeError::Connect(err.to_string())
        } else {
            ProbeError::Client(err.to_string())
        }
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn check(&self) -> Status {
        let outcome = self.probe().await;

        if let Err(e) = &outcome {
            match e {
                ProbeError::Status(code) => tracing::warn!(
                    url = %self.url,
                    status = code,
                    "API check failed: non-success status"
                ),
                _ => tracing::error!(url = %self.url, error = %e, "API check failed"),
            }
        }

        status_from(&outcome)
    }
}
