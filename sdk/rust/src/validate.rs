//! Client-side validation.
//!
//! Same rule table as the server, implemented independently (the two
//! sides of the deployed system cannot share code). The error strings
//! are the contract; change them in both places or not at all.

/// Minimum accepted message length, in characters.
pub const MESSAGE_MIN: usize = 10;

/// Permissive address syntax: one non-whitespace run, `@`, one
/// non-whitespace run containing an interior dot.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // The dot must be interior: at least one character on each side.
    let domain: Vec<char> = domain.chars().collect();
    domain.len() >= 3 && domain[1..domain.len() - 1].contains(&'.')
}

/// Validate a submission's fields, returning every violation.
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
