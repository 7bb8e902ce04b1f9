//! The contact submission endpoint.
//!
//! # Responsibilities
//! - Parse and type-check the request body
//! - Run shared validation, rate limiting, sanitization
//! - Drive the mail sender and map its outcome
//!
//! # Design Decisions
//! - Terminal at the first failing step; the mail sender is only ever
//!   reached by a fully valid, admitted submission
//! - Rate limiting runs after validation so an invalid flood never
//!   consumes the caller's quota
//! - No retry after a send attempt; callers needing reliability resubmit

use std::net::SocketAddr;

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};

use crate::contact::submission::{EMAIL_MAX, MESSAGE_MAX, NAME_MAX};
use crate::contact::{validate, ContactSubmission};
use crate::http::request::X_REQUEST_ID;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;

/// `POST /api/contact` — validate, admit, sanitize, relay as email.
pub async fn submit_contact(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let request_id = headers
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let Json(body) = payload.map_err(|_| ApiError::Invalid("Invalid JSON body".to_string()))?;

    let name = string_field(&body, "name")?;
    let email = string_field(&body, "email")?;
    let message = string_field(&body, "message")?;

    if name.chars().count() > NAME_MAX
        || email.chars().count() > EMAIL_MAX
        || message.chars().count() > MESSAGE_MAX
    {
        return Err(ApiError::Invalid("Input values are too long".to_string()));
    }

    // The browser trims before validating; mirror that here so both
    // sides judge the same values.
    let (name, email, message) = (name.trim(), email.trim(), message.trim());

    let violations = validate(name, email, message);
    if !violations.is_empty() {
        return Err(ApiError::Invalid(violations.join(", ")));
    }

    let client = addr.ip().to_string();
    if !state.limiter.admit(&client) {
        tracing::warn!(client = %client, request_id = %request_id, "Rate limit exceeded");
        metrics::record_rate_limited();
        return Err(ApiError::RateLimited);
    }

    let submission = ContactSubmission::sanitized(name, email, message);

    // Sanitization can only ever remove characters, but the remainder
    // still has to be a deliverable mailbox.
    if submission.email.parse::<lettre::Address>().is_err() {
        return Err(ApiError::Invalid("Invalid email address".to_string()));
    }

    match state.mailer.send(&submission).await {
        Ok(()) => {
            tracing::info!(
                request_id = %request_id,
                from = %submission.email,
                "Contact email sent"
            );
            metrics::record_mail("sent");
            metrics::record_submission(200);
            Ok(Json(json!({ "ok": true })))
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                "Error sending contact email"
            );
            metrics::record_mail("failed");
            Err(ApiError::Send(e))
        }
    }
}

/// Extract a field that must be textual when present. Missing or null
/// counts as empty so the validator reports the "required" reason.
fn string_field<'a>(body: &'a Value, key: &str) -> Result<&'a str, ApiError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(""),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ApiError::Invalid("Invalid input types".to_string())),
    }
}
