//! Service entry point: configuration, logging, metrics, HTTP server.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fraud_guard::config::load_config;
use fraud_guard::observability::metrics;
use fraud_guard::HttpServer;

#[derive(Parser)]
#[command(name = "fraud-guard")]
#[command(about = "Telegram fraud-risk assessment relay", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Credentials may also be supplied
    /// via TELEGRAM_BOT_TOKEN / OPENAI_API_KEY.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    // Initialize tracing subscriber; RUST_LOG wins over the config level.
    let default_filter = format!(
        "fraud_guard={},tower_http=info",
        config.observability.log_level
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "fraud-guard starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        model = %config.analysis.model,
        transcription_model = %config.transcription.model,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for webhook deliveries");

    // Metrics exporter
    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    // Create and run HTTP server
    let server = HttpServer::new(&config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
