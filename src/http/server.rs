//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, timeout, body limit, request ID, CORS)
//! - Serve the static site as the fallback on the same port
//! - Bind the server to a listener and run it to shutdown
//! - Spawn the rate-limit sweeper

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::contact::submit_contact;
use crate::http::health::health;
use crate::http::request::RequestIdLayer;
use crate::lifecycle::{wait_for_signal, Shutdown};
use crate::mail::MailSender;
use crate::security::{FixedWindowLimiter, RateLimitStore};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn MailSender>,
    pub limiter: Arc<dyn RateLimitStore>,
    pub started_at: Instant,
}

/// HTTP server for the contact relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
    limiter: Arc<dyn RateLimitStore>,
    shutdown: Shutdown,
}

impl HttpServer {
    /// Create a new server with the production rate-limit store.
    pub fn new(config: RelayConfig, mailer: Arc<dyn MailSender>) -> Self {
        let limiter: Arc<dyn RateLimitStore> =
            Arc::new(FixedWindowLimiter::from_config(&config.rate_limit));
        Self::with_limiter(config, mailer, limiter)
    }

    /// Create a new server with an injected rate-limit store.
    pub fn with_limiter(
        config: RelayConfig,
        mailer: Arc<dyn MailSender>,
        limiter: Arc<dyn RateLimitStore>,
    ) -> Self {
        let state = AppState {
            mailer,
            limiter: Arc::clone(&limiter),
            started_at: Instant::now(),
        };

        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            limiter,
            shutdown: Shutdown::new(),
        }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// CORS covers only the API routes; the layers added after the
    /// static fallback apply to everything.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/health", get(health))
            .route("/api/contact", post(submit_contact))
            .with_state(state)
            .layer(CorsLayer::permissive())
            .fallback_service(ServeDir::new(&config.server.static_dir))
            .layer(RequestBodyLimitLayer::new(config.server.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        self.spawn_sweeper();

        let shutdown = self.shutdown.clone();
        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                wait_for_signal().await;
                shutdown.trigger();
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Periodically drop rate-limit entries whose window has elapsed,
    /// so the counter map stays bounded by recently-active addresses.
    fn spawn_sweeper(&self) {
        let limiter = Arc::clone(&self.limiter);
        let mut shutdown_rx = self.shutdown.subscribe();
        let sweep_interval = Duration::from_secs(self.config.rate_limit.window_secs);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(sweep_interval);
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        limiter.prune();
                    }
                    _ = shutdown_rx.recv() => {
                        tracing::debug!("Rate limit sweeper exiting");
                        break;
                    }
                }
            }
        });
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}
