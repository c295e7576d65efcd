//! Metrics collection and exposition.
//!
//! # Metrics
//! - `api_monitor_checks_total` (counter): completed checks by resulting status
//! - `api_monitor_status` (gauge): 1=up, 0=down, updated on transitions
//! - `api_monitor_notifications_total` (counter): alerts by kind (down, recovery) and outcome
//!
//! Without an installed recorder every call here is a no-op.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;

use crate::probe::Status;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    ::metrics::gauge!("api_monitor_status").set(1.0);
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_check(status: Status) {
    ::metrics::counter!("api_monitor_checks_total", "status" => status.as_str()).increment(1);
}

pub fn record_status(status: Status) {
    let value = if status.is_up() { 1.0 } else { 0.0 };
    ::metrics::gauge!("api_monitor_status").set(value);
}

pub fn record_notification(kind: &'static str, delivered: bool) {
    let labels = notification_labels(kind, delivered);
    ::metrics::counter!("api_monitor_notifications_total", &labels).increment(1);
}

fn notification_labels(kind: &'static str, delivered: bool) -> [(&'static str, &'static str); 2] {
    let outcome = if delivered { "sent" } else { "failed" };
    [("kind", kind), ("outcome", outcome)]
}
