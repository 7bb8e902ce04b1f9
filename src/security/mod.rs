//! Abuse protection subsystem.
//!
//! # Data Flow
//! ```text
//! Validated submission:
//!     → rate_limit.rs (per-address window counter)
//!     → admitted → mail subsystem
//!     → rejected → 429, mail sender never invoked
//! ```
//!
//! # Design Decisions
//! - The store is an injectable abstraction: in-memory for a single
//!   process, swappable for a shared store in multi-process deployments
//! - Fail closed is not wanted here: the counter is the only defense
//!   (no CAPTCHA, no proof-of-work), and a full window simply rejects
//! - Counter state is non-persistent and resets on restart

pub mod rate_limit;

pub use rate_limit::{FixedWindowLimiter, RateLimitStore};
