//! API availability monitor.
//!
//! Polls one HTTP endpoint on a fixed interval and emails the operator
//! through Mailgun whenever it goes down or comes back up.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────┐   check    ┌──────────┐
//!   │ Monitor  │──────────▶│  Prober  │──── POST ───▶ target API
//!   │  (loop)  │◀──────────│  (http)  │
//!   │          │   Status   └──────────┘
//!   │  state:  │
//!   │  Up/Down │ transition ┌──────────┐
//!   │          │──────────▶│ Notifier │──── POST ───▶ Mailgun
//!   └────▲─────┘   Alert    │ (mailgun)│
//!        │                  └──────────┘
//!        │ shutdown
//!   ┌────┴─────┐
//!   │ signals  │◀── SIGINT / SIGTERM
//!   └──────────┘
//! ```

use std::sync::Arc;

use clap::Parser;

use api_monitor::cli::Cli;
use api_monitor::lifecycle::{signals, Shutdown};
use api_monitor::notify::MailgunNotifier;
use api_monitor::observability::{logging, metrics};
use api_monitor::probe::HttpProber;
use api_monitor::Monitor;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    logging::init_logging(&config.observability)?;

    tracing::info!(
        url = %config.target.url,
        interval_secs = config.interval_secs,
        timeout_secs = config.target.timeout_secs,
        email_to = %config.mailgun.email_to,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let prober = HttpProber::new(&config.target)?;
    let notifier = MailgunNotifier::new(&config.mailgun)?;
    let monitor = Monitor::new(Arc::new(prober), Arc::new(notifier), config.interval());

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown.clone());

    monitor.run(receiver).await;

    Ok(())
}
