//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use contact_relay::config::RelayConfig;
use contact_relay::contact::ContactSubmission;
use contact_relay::http::HttpServer;
use contact_relay::mail::{MailError, MailSender};
use tokio::net::TcpListener;

/// Mail sender double: records every delivered submission, optionally
/// failing instead.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<ContactSubmission>>,
    fail: AtomicBool,
}

impl RecordingMailer {
    /// Everything delivered so far.
    pub fn sent(&self) -> Vec<ContactSubmission> {
        self.sent.lock().unwrap().clone()
    }

    /// Make subsequent sends fail like a broken transport.
    pub fn fail_next_sends(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl MailSender for RecordingMailer {
    async fn verify(&self) -> Result<(), MailError> {
        Ok(())
    }

    async fn send(&self, submission: &ContactSubmission) -> Result<(), MailError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(MailError::Rejected);
        }
        self.sent.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

/// A relay instance listening on an ephemeral port.
pub struct TestApp {
    pub addr: SocketAddr,
    pub mailer: Arc<RecordingMailer>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Relaxed defaults so unrelated tests never trip the rate limiter.
pub fn test_config() -> RelayConfig {
    let mut config = RelayConfig::default();
    config.rate_limit.max_requests = 1000;
    config
}

/// Start the full service with a recording mailer injected.
pub async fn spawn_app(config: RelayConfig) -> TestApp {
    let mailer = Arc::new(RecordingMailer::default());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config, Arc::clone(&mailer) as Arc<dyn MailSender>);
    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });

    TestApp { addr, mailer }
}
