//! Outbound mail subsystem.
//!
//! # Data Flow
//! ```text
//! ContactSubmission (validated, sanitized)
//!     → message.rs (plain-text + HTML alternatives)
//!     → smtp.rs (shared async SMTP transport, bounded send)
//!     → relay account's provider
//! ```
//!
//! # Design Decisions
//! - One transport built at startup and shared across requests; sends
//!   run concurrently and independently, no queue
//! - Startup verification is logged, never fatal: a misconfigured
//!   account degrades the send path instead of stopping the process
//! - Send failures carry full detail for the server log; the HTTP layer
//!   translates them to a generic message

pub mod message;
pub mod smtp;

use async_trait::async_trait;
use thiserror::Error;

use crate::contact::ContactSubmission;

pub use smtp::{build_mailer, DisabledMailer, SmtpMailer};

/// Errors produced by the mail subsystem.
#[derive(Debug, Error)]
pub enum MailError {
    /// The relay account is missing from the configuration.
    #[error("mail transport is not configured")]
    NotConfigured,

    /// A mailbox could not be parsed from its textual form.
    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message itself could not be assembled.
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// The SMTP conversation failed.
    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The relay answered, but not with a positive completion code.
    #[error("smtp relay rejected the message")]
    Rejected,

    /// The application-level bound on one send attempt elapsed.
    #[error("send timed out after {0:?}")]
    Timeout(std::time::Duration),
}

/// Delivery capability the submission endpoint depends on.
///
/// Production uses the SMTP implementation; tests inject recording or
/// failing doubles through this seam.
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Startup-time connection test. Logged by the caller; non-fatal.
    async fn verify(&self) -> Result<(), MailError>;

    /// Deliver one submission. Exactly one message per valid submission.
    async fn send(&self, submission: &ContactSubmission) -> Result<(), MailError>;
}
