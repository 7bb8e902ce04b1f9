//! Contact submission domain.
//!
//! # Data Flow
//! ```text
//! Incoming fields (name, email, message)
//!     → validate.rs (rule table, every violation reported)
//!     → sanitize.rs (denylist stripping)
//!     → ContactSubmission (bounds + syntax already enforced)
//!     → mail subsystem
//! ```
//!
//! # Design Decisions
//! - Validation collects all violations, never short-circuits
//! - Sanitization happens exactly once, when the submission is built
//! - The same rule table is re-implemented in the client SDK; the two
//!   sides are kept in lockstep by identical test vectors

pub mod sanitize;
pub mod submission;
pub mod validate;

pub use sanitize::sanitize;
pub use submission::ContactSubmission;
pub use validate::validate;
