//! The submission client.

use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::validate::validate;

/// Acknowledgment text an embedder can show on success.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// How a submission attempt can fail.
///
/// Everything past local validation collapses into [`SubmitError::Failed`]:
/// HTTP errors, network failures and unparseable responses all read the
/// same to the person filling in the form, and server internals are
/// never surfaced.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Local validation found these violations; nothing was sent.
    #[error("{}", .0.join(", "))]
    Invalid(Vec<String>),

    /// Another submission from this client is still pending.
    #[error("A submission is already in progress.")]
    InFlight,

    /// The attempt reached the network and did not succeed.
    #[error("Failed to send message. Please try again later.")]
    Failed,
}

/// Response of the relay's health endpoint.
#[derive(Debug, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
    pub uptime: u64,
}

/// Client for the contact relay API.
///
/// Holds the submitting side of the pipeline: trim, validate locally,
/// refuse overlapping submissions, post, map the outcome.
pub struct ContactClient {
    client: Client,
    base_url: String,
    in_flight: AtomicBool,
}

impl ContactClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Submit one contact-form attempt.
    ///
    /// Violations found locally are returned without touching the
    /// network. While an attempt is pending every further call returns
    /// [`SubmitError::InFlight`]; the guard is released when the attempt
    /// resolves, whatever the outcome.
    pub async fn submit(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<(), SubmitError> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(SubmitError::InFlight);
        }

        let result = self.submit_inner(name, email, message).await;
        self.in_flight.store(false, Ordering::Release);
        result
    }

    async fn submit_inner(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<(), SubmitError> {
        let (name, email, message) = (name.trim(), email.trim(), message.trim());

        let errors = validate(name, email, message);
        if !errors.is_empty() {
            return Err(SubmitError::Invalid(errors));
        }

        let response = self
            .client
            .post(format!("{}/api/contact", self.base_url))
            .json(&json!({ "name": name, "email": email, "message": message }))
            .send()
            .await
            .map_err(|_| SubmitError::Failed)?;

        if !response.status().is_success() {
            return Err(SubmitError::Failed);
        }

        let ack: Value = response.json().await.map_err(|_| SubmitError::Failed)?;
        if ack.get("ok").and_then(Value::as_bool) == Some(true) {
            Ok(())
        } else {
            Err(SubmitError::Failed)
        }
    }

    /// Probe the relay's health endpoint.
    pub async fn health(&self) -> Result<HealthStatus, reqwest::Error> {
        self.client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
