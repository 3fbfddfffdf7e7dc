//! HTTP handling subsystem.
//!
//! # Data Flow
//! ```text
//! webhook POST
//!     → server.rs (Axum setup, timeout, request ID, tracing)
//!     → webhook.rs (parse update, dispatch text/voice)
//!     → analysis / voice pipelines
//!     → telegram client (formatted reply)
//! ```

pub mod admin;
pub mod request;
pub mod server;
pub mod webhook;

pub use server::{AppState, HttpServer, SetupError};
