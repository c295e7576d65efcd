//! Poll loop driving the status state machine.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::{
    self,
    error::{RecvError, TryRecvError},
};
use tokio::time;

use crate::monitor::state::{MonitorState, Transition};
use crate::notify::Notifier;
use crate::observability::metrics;
use crate::probe::{Prober, Status};

/// Watches one endpoint and alerts on status changes.
pub struct Monitor {
    prober: Arc<dyn Prober>,
    notifier: Arc<dyn Notifier>,
    state: MonitorState,
    interval: Duration,
}

impl Monitor {
    pub fn new(prober: Arc<dyn Prober>, notifier: Arc<dyn Notifier>, interval: Duration) -> Self {
        Self {
            prober,
            notifier,
            state: MonitorState::new(),
            interval,
        }
    }

    /// Last known status.
    pub fn status(&self) -> Status {
        self.state.current()
    }

    /// Run the poll loop until a shutdown signal arrives.
    ///
    /// Shutdown is honoured before each check and while waiting between
    /// checks. A check that has started always finishes, alert included.
    /// If every `Shutdown` handle is dropped the loop keeps polling.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            "API Monitor started. Press Ctrl-C to exit."
        );

        loop {
            if shutdown_pending(&mut shutdown) {
                break;
            }

            self.tick().await;

            tokio::select! {
                _ = time::sleep(self.interval) => {}
                _ = shutdown_requested(&mut shutdown) => break,
            }
        }

        tracing::info!("API Monitor shutdown requested. Exiting.");
    }

    /// Perform one check and alert if the status changed.
    pub async fn tick(&mut self) -> Option<Transition> {
        tracing::info!("Checking API status...");
        let new_status = self.prober.check().await;
        metrics::record_check(new_status);

        let Some(transition) = self.state.observe(new_status) else {
            tracing::debug!(status = %new_status, "API status unchanged");
            return None;
        };

        match transition {
            Transition::Down => tracing::error!(status = %new_status, "API went down"),
            Transition::Recovery => tracing::warn!(status = %new_status, "API recovered"),
        }
        metrics::record_status(new_status);

        let alert = transition.alert();
        match self.notifier.send(&alert).await {
            Ok(()) => metrics::record_notification(transition.as_str(), true),
            Err(e) => {
                tracing::error!(subject = %alert.subject, error = %e, "Failed to send email");
                metrics::record_notification(transition.as_str(), false);
            }
        }

        Some(transition)
    }
}

/// Non-blocking look at the shutdown channel.
fn shutdown_pending(shutdown: &mut broadcast::Receiver<()>) -> bool {
    match shutdown.try_recv() {
        Ok(()) | Err(TryRecvError::Lagged(_)) => true,
        Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => false,
    }
}

/// Resolve once shutdown is triggered.
///
/// A closed channel means nothing can trigger it any more, so this never
/// resolves and the interval sleep wins.
async fn shutdown_requested(shutdown: &mut broadcast::Receiver<()>) {
    match shutdown.recv().await {
        Ok(()) | Err(RecvError::Lagged(_)) => {}
        Err(RecvError::Closed) => std::future::pending().await,
    }
}
