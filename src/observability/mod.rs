//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; level from config, overridable
//!   with RUST_LOG
//! - Metrics are cheap (atomic increments) and off by default
//! - Transport errors are logged in full here and nowhere else; HTTP
//!   responses only ever carry generic text

pub mod logging;
pub mod metrics;
