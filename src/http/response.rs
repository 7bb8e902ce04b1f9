//! Response mapping.
//!
//! # Responsibilities
//! - Translate domain errors to HTTP statuses and plain-text bodies
//! - Keep transport internals out of anything a caller can see
//!
//! # Design Decisions
//! - Validation problems echo their combined reasons (client-correctable)
//! - Send failures collapse to one generic body; the detail was already
//!   logged where the request context lives

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::mail::MailError;
use crate::observability::metrics;

/// Errors a contact submission can terminate with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed a validation step. The string is the
    /// full user-facing reason list.
    #[error("{0}")]
    Invalid(String),

    /// The caller's address exhausted its submission window.
    #[error("Too many contact requests from this IP, please try again later.")]
    RateLimited,

    /// The mail transport failed; detail stays server-side.
    #[error("Failed to send email")]
    Send(#[source] MailError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Invalid(_) => StatusCode::BAD_REQUEST,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Send(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        metrics::record_submission(status.as_u16());
        (status, self.to_string()).into_response()
    }
}
