//! Metrics collection and exposition.
//!
//! # Metrics
//! - `contact_requests_total` (counter): submissions by response status
//! - `contact_mail_total` (counter): mail send attempts by outcome
//! - `contact_rate_limited_total` (counter): submissions rejected by the
//!   rate limiter

use std::net::SocketAddr;

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
///
/// Failure is logged and ignored: metrics are an optional facility and
/// must never take the service down.
pub fn init_metrics(addr: SocketAddr) {
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        tracing::error!(error = %e, "Failed to install metrics exporter");
        return;
    }

    describe_counter!(
        "contact_requests_total",
        "Contact submissions by response status"
    );
    describe_counter!("contact_mail_total", "Mail send attempts by outcome");
    describe_counter!(
        "contact_rate_limited_total",
        "Submissions rejected by the rate limiter"
    );

    tracing::info!(address = %addr, "Metrics exporter listening");
}

pub fn record_submission(status: u16) {
    counter!("contact_requests_total", "status" => status.to_string()).increment(1);
}

pub fn record_mail(outcome: &'static str) {
    counter!("contact_mail_total", "outcome" => outcome).increment(1);
}

pub fn record_rate_limited() {
    counter!("contact_rate_limited_total").increment(1);
}
