//! Monitor wired to the real HTTP probe and Mailgun notifier.

use api_monitor::config::{MailgunConfig, TargetConfig};
use api_monitor::monitor::Transition;
use api_monitor::notify::MailgunNotifier;
use api_monitor::probe::{HttpProber, Status};
use api_monitor::{Monitor, Shutdown};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

mod common;

fn target(url: String) -> TargetConfig {
    TargetConfig {
        url,
        username: "monitor".into(),
        password: "secret".into(),
        timeout_secs: 1,
    }
}

fn mailgun(base_url: String) -> MailgunConfig {
    MailgunConfig {
        api_key: "key-123".into(),
        domain: "mg.example.com".into(),
        email_to: "ops@example.com".into(),
        base_url,
        sender_name: "API Monitor".into(),
    }
}

#[tokio::test]
async fn test_outage_and_recovery_send_one_email_each() {
    let healthy = Arc::new(AtomicBool::new(true));
    let h = healthy.clone();
    let (api_addr, _) = common::start_programmable_backend(move || {
        let h = h.clone();
        async move {
            if h.load(Ordering::SeqCst) {
                (200, "ok".into())
            } else {
                (503, "maintenance".into())
            }
        }
    })
    .await;
    let (mail_addr, emails) = common::start_fixed_backend(200, "{}").await;

    let prober = HttpProber::new(&target(format!("http://{}/login", api_addr))).unwrap();
    let notifier = MailgunNotifier::new(&mailgun(format!("http://{}", mail_addr))).unwrap();
    let mut monitor = Monitor::new(Arc::new(prober), Arc::new(notifier), Duration::from_secs(60));

    assert_eq!(monitor.tick().await, None);

    healthy.store(false, Ordering::SeqCst);
    assert_eq!(monitor.tick().await, Some(Transition::Down));
    assert_eq!(monitor.tick().await, None);
    assert_eq!(monitor.status(), Status::Down);

    healthy.store(true, Ordering::SeqCst);
    assert_eq!(monitor.tick().await, Some(Transition::Recovery));
    assert_eq!(monitor.tick().await, None);

    let emails = emails.lock().unwrap();
    assert_eq!(emails.len(), 2);
    assert!(emails[0].contains("subject=API+Status+Alert"));
    assert!(emails[1].contains("subject=API+Status+Recovery"));
}

#[tokio::test]
async fn test_mail_outage_does_not_stop_monitoring() {
    let (api_addr, _) = common::start_fixed_backend(500, "").await;
    let (mail_addr, emails) = common::start_fixed_backend(502, "bad gateway").await;

    let prober = HttpProber::new(&target(format!("http://{}/login", api_addr))).unwrap();
    let notifier = MailgunNotifier::new(&mailgun(format!("http://{}", mail_addr))).unwrap();
    let mut monitor = Monitor::new(Arc::new(prober), Arc::new(notifier), Duration::from_secs(60));

    assert_eq!(monitor.tick().await, Some(Transition::Down));
    assert_eq!(monitor.tick().await, None);
    assert_eq!(monitor.status(), Status::Down);
    assert_eq!(emails.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_run_exits_cleanly_on_shutdown() {
    let (api_addr, probes) = common::start_fixed_backend(200, "ok").await;
    let (mail_addr, _) = common::start_fixed_backend(200, "{}").await;

    let prober = HttpProber::new(&target(format!("http://{}/login", api_addr))).unwrap();
    let notifier = MailgunNotifier::new(&mailgun(format!("http://{}", mail_addr))).unwrap();
    let monitor = Monitor::new(Arc::new(prober), Arc::new(notifier), Duration::from_secs(3600));

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    // Wait for the first check to land, then stop during the interval wait.
    for _ in 0..50 {
        if !probes.lock().unwrap().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    shutdown.trigger();

    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("monitor did not stop")
        .unwrap();
    assert_eq!(probes.lock().unwrap().len(), 1);
}
