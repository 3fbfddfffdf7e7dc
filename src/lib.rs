//! FraudGuard AI: webhook relay between a chat platform and an LLM
//! risk-assessment service.
//!
//! # Architecture Overview
//!
//! ```text
//!   Telegram webhook                                  Telegram sendMessage
//!   ────────────────▶ http ──▶ analysis ──▶ reply ──▶ ────────────────────
//!                      │            │
//!                      │            ▼
//!                      │       openai client ◀──── chat/completions
//!                      ▼            ▲
//!                    voice ─────────┘              audio/transcriptions
//!                      ▲
//!                      └── telegram client (getFile, file download)
//!
//!   Cross-cutting: config, observability (tracing + metrics)
//! ```

// Core subsystems
pub mod analysis;
pub mod config;
pub mod http;
pub mod reply;
pub mod voice;

// External service clients
pub mod openai;
pub mod telegram;

// Cross-cutting concerns
pub mod observability;

pub use config::GuardConfig;
pub use http::HttpServer;
