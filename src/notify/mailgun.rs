//! Mailgun email delivery.
//!
//! # Responsibilities
//! - Build the Mailgun "send message" form request
//! - Authenticate with the account API key
//! - Turn non-success responses into `DeliveryError::Rejected`
//!
//! # Security
//! - The API key is only ever sent as basic-auth password, never logged

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::config::MailgunConfig;
use crate::notify::{Alert, DeliveryError, Notifier};

/// Timeout for one delivery request.
const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Successful reply body from the messages endpoint.
#[derive(Debug, Deserialize)]
struct SendResponse {
    #[serde(default)]
    id: Option<String>,
}

pub struct MailgunNotifier {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from: String,
    to: String,
}

impl MailgunNotifier {
    pub fn new(config: &MailgunConfig) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: messages_endpoint(&config.base_url, &config.domain),
            api_key: config.api_key.clone(),
            from: format!("{} <mailgun@{}>", config.sender_name, config.domain),
            to: config.email_to.clone(),
        })
    }
}

fn messages_endpoint(base_url: &str, domain: &str) -> String {
    format!("{}/v3/{}/messages", base_url.trim_end_matches('/'), domain)
}

#[async_trait]
impl Notifier for MailgunNotifier {
    async fn send(&self, alert: &Alert) -> Result<(), DeliveryError> {
        let form = [
            ("from", self.from.as_str()),
            ("to", self.to.as_str()),
            ("subject", alert.subject.as_str()),
            ("text", alert.body.as_str()),
        ];

        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth("api", Some(&self.api_key))
            .form(&form)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.unwrap_or_default();
        let message_id = serde_json::from_str::<SendResponse>(&body)
            .ok()
            .and_then(|r| r.id)
            .unwrap_or_default();

        tracing::info!(
            subject = %alert.subject,
            to = %self.to,
            message_id = %message_id,
            "Email sent"
        );
        Ok(())
    }
}
