//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (timeout, request ID, tracing)
//! - Construct the outbound clients and share them via [`AppState`]
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::analysis::AnalysisEngine;
use crate::config::GuardConfig;
use crate::http::admin;
use crate::http::request::request_id_layer;
use crate::http::webhook::handle_webhook;
use crate::openai::{OpenAiClient, OpenAiError};
use crate::telegram::{TelegramClient, TelegramError};
use crate::voice::VoicePipeline;

/// Failure to construct the outbound clients at startup.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("telegram client: {0}")]
    Telegram(#[from] TelegramError),

    #[error("model client: {0}")]
    OpenAi(#[from] OpenAiError),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub telegram: Arc<TelegramClient>,
    pub engine: Arc<AnalysisEngine>,
    pub voice: Arc<VoicePipeline>,
    pub excerpt_chars: usize,
}

impl AppState {
    /// Build the clients and pipelines from configuration.
    pub fn from_config(config: &GuardConfig) -> Result<Self, SetupError> {
        let telegram = Arc::new(TelegramClient::new(&config.telegram)?);
        let openai = Arc::new(OpenAiClient::new(&config.openai)?);
        let engine = Arc::new(AnalysisEngine::new(openai.clone(), &config.analysis));
        let voice = Arc::new(VoicePipeline::new(
            telegram.clone(),
            openai,
            &config.transcription,
        ));

        Ok(Self {
            telegram,
            engine,
            voice,
            excerpt_chars: config.analysis.excerpt_chars,
        })
    }
}

/// HTTP server for the webhook service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: &GuardConfig) -> Result<Self, SetupError> {
        let state = AppState::from_config(config)?;
        Ok(Self {
            router: Self::build_router(config, state),
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GuardConfig, state: AppState) -> Router {
        Router::new()
            .route("/webhook", post(handle_webhook))
            .route("/health", get(admin::health))
            .route("/admin/status", get(admin::get_status))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(request_id_layer())
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The assembled router, for driving the service in-process in tests.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %error, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
