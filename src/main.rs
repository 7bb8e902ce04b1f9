use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use contact_relay::config;
use contact_relay::http::HttpServer;
use contact_relay::mail::build_mailer;
use contact_relay::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "contact-relay")]
#[command(about = "Contact-form relay for the portfolio site", long_about = None)]
struct Cli {
    /// Path to the TOML config file (defaults to relay.toml when present).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Credentials conventionally live in a local .env during development.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.server.bind_address,
        static_dir = %config.server.static_dir,
        rate_limit_window_secs = config.rate_limit.window_secs,
        rate_limit_max_requests = config.rate_limit.max_requests,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // Verify the relay account once at startup; misconfiguration must be
    // visible in the log without stopping the process.
    let mailer = build_mailer(&config);
    match mailer.verify().await {
        Ok(()) => tracing::info!("Mail transport verified, ready to send messages"),
        Err(e) => tracing::error!(
            error = %e,
            "Error verifying mail transport; check SMTP_USER/SMTP_PASS"
        ),
    }

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(config, mailer);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
