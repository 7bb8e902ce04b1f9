//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init logging/metrics → Build mailer → Verify (non-fatal)
//!     → Bind listener → Serve
//!
//! Shutdown:
//!     SIGINT/SIGTERM (signals.rs)
//!     → Shutdown broadcast (shutdown.rs)
//!     → server stops accepting, sweeper exits, process drains
//! ```
//!
//! # Design Decisions
//! - Config errors are fatal at startup; mail verification is not
//! - Background tasks subscribe to one broadcast channel and exit on it

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::wait_for_signal;
