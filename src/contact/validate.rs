//! Submission validation.
//!
//! # Responsibilities
//! - Check presence and length bounds of each field
//! - Check the sender address against a permissive syntax
//! - Report every violation, not just the first
//!
//! # Design Decisions
//! - Pure function: no I/O, no shared state
//! - Error strings are the user-facing contract and must match the
//!   client SDK verbatim

use once_cell::sync::Lazy;
use regex::Regex;

use crate::contact::submission::MESSAGE_MIN;

/// Permissive address syntax: one non-whitespace run, `@`, one
/// non-whitespace run containing at least one dot. Deliberately far from
/// full RFC 5322; the SMTP relay is the final arbiter.
static EMAIL_SYNTAX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Check a sender address against the permissive syntax.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SYNTAX.is_match(email)
}

/// Validate a submission's fields, returning every violation.
///
/// An empty vector means the submission is acceptable. Every rule is
/// evaluated so the caller can report all problems at once.
pub fn validate(name: &str, email: &str, message: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push("Name is required".to_string());
    }

    if email.is_empty() {
        errors.push("Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.push("Please enter a valid email".to_string());
    }

    if message.is_empty() {
        errors.push("Message is required".to_string());
    } else if message.chars().count() < MESSAGE_MIN {
        errors.push("Message must be at least 10 characters".to_string());
    }

    errors
}
