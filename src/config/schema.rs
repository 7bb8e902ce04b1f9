//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! relay. All types derive Serde traits for deserialization from the
//! config file; secrets are overlaid from the environment by the loader.

use serde::{Deserialize, Serialize};

/// Root configuration for the contact relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener and static asset settings.
    pub server: ServerConfig,

    /// Per-address submission limits.
    pub rate_limit: RateLimitConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Outbound mail account.
    pub mail: MailConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,

    /// Directory the static site is served from.
    pub static_dir: String,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Replace the port part of the bind address, keeping the host.
    pub fn set_port(&mut self, port: u16) {
        let host = self
            .bind_address
            .rsplit_once(':')
            .map(|(host, _)| host)
            .unwrap_or(&self.bind_address)
            .to_string();
        self.bind_address = format!("{host}:{port}");
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            static_dir: ".".to_string(),
            max_body_bytes: 64 * 1024,
        }
    }
}

/// Rate limiting configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Window length in seconds.
    pub window_secs: u64,

    /// Maximum submissions per client address within one window.
    pub max_requests: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: 60 * 60,
            max_requests: 10,
        }
    }
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// Upper bound on a single mail-send attempt in seconds.
    pub mail_send_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            mail_send_secs: 20,
        }
    }
}

/// Outbound mail account configuration.
///
/// The credentials are expected from the environment (`SMTP_USER`,
/// `SMTP_PASS`); their absence is not fatal, it degrades the send path.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MailConfig {
    /// SMTP relay host (STARTTLS on the submission port).
    pub relay_host: String,

    /// Relay account name, also the fallback recipient.
    pub user: Option<String>,

    /// Relay account credential.
    pub password: Option<String>,

    /// Recipient override; falls back to `user` when unset.
    pub recipient: Option<String>,
}

impl MailConfig {
    /// The address submissions are delivered to.
    pub fn recipient_address(&self) -> Option<&str> {
        self.recipient.as_deref().or(self.user.as_deref())
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            relay_host: "smtp.gmail.com".to_string(),
            user: None,
            password: None,
            recipient: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
