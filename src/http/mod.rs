//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → contact.rs / health.rs (handlers)
//!     → response.rs (domain error → status + body)
//!     → Send to client
//!
//! Anything outside /api/* falls through to the static site.
//! ```

pub mod contact;
pub mod health;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer};
