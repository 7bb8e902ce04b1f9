//! Client SDK for the contact relay.
//!
//! Implements the submitting side of the contact pipeline: local
//! validation (the same rule table the server enforces, implemented
//! independently and held in lockstep by shared test vectors), a
//! single-submission-in-flight guard, and response mapping that never
//! surfaces server internals.

pub mod client;
pub mod validate;

pub use client::{ContactClient, HealthStatus, SubmitError, SUCCESS_MESSAGE};
pub use validate::validate;
