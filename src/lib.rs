//! Contact Relay
//!
//! A small production HTTP service that accepts portfolio contact-form
//! submissions and relays them as email through an SMTP relay account.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────┐
//!                    │                  CONTACT RELAY                   │
//!                    │                                                  │
//!   POST /api/contact│  ┌─────────┐   ┌──────────┐   ┌──────────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│ contact  │──▶│   security   │  │
//!                    │  │ server  │   │ validate │   │  rate limit  │  │
//!                    │  └─────────┘   │ sanitize │   └──────┬───────┘  │
//!                    │                └──────────┘          │          │
//!                    │                                      ▼          │
//!   200 {ok:true}    │  ┌─────────┐                 ┌──────────────┐   │     SMTP
//!   ◀────────────────┼──│response │◀────────────────│     mail     │───┼───▶ relay
//!                    │  │ mapping │                 │ smtp sender  │   │
//!                    │  └─────────┘                 └──────────────┘   │
//!                    │                                                 │
//!                    │  ┌───────────────────────────────────────────┐  │
//!                    │  │           Cross-Cutting Concerns          │  │
//!                    │  │  ┌────────┐ ┌───────────┐ ┌────────────┐  │  │
//!                    │  │  │ config │ │ lifecycle │ │observability│ │  │
//!                    │  │  └────────┘ └───────────┘ └────────────┘  │  │
//!                    │  └───────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────────┘
//! ```
//!
//! Everything outside `/api/*` falls through to static file service so
//! the site and its form share one origin. The client-side counterpart
//! of the submission flow lives in the `contact-sdk` crate under
//! `sdk/rust`.

// Core subsystems
pub mod config;
pub mod contact;
pub mod http;
pub mod mail;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
