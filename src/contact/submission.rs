//! The contact submission model.

use crate::contact::sanitize;

/// Maximum accepted length of the sender name, in characters.
pub const NAME_MAX: usize = 100;

/// Maximum accepted length of the sender address, in characters.
pub const EMAIL_MAX: usize = 254;

/// Minimum accepted length of the message body, in characters.
pub const MESSAGE_MIN: usize = 10;

/// Maximum accepted length of the message body, in characters.
pub const MESSAGE_MAX: usize = 5000;

/// One contact-form attempt.
///
/// Built from a request body after validation has passed; all fields are
/// sanitized at construction. Lives for the duration of a single request
/// and is dropped once the send attempt resolves — there is no retry
/// queue and nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Build a submission from already-validated fields, sanitizing each one.
    pub fn sanitized(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: sanitize(name),
            email: sanitize(email),
            message: sanitize(message),
        }
    }
}
