//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (environment overlay: SMTP_*, RECIPIENT_EMAIL, PORT)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared with all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults so the service runs with no file at all
//! - Secrets (SMTP credentials) come from the environment, never from
//!   the file; a `.env` file is honored when present
//! - Validation separates syntactic (serde) from semantic checks and
//!   reports every violation, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, ConfigError, DEFAULT_CONFIG_PATH};
pub use schema::{
    MailConfig, ObservabilityConfig, RateLimitConfig, RelayConfig, ServerConfig, TimeoutConfig,
};
