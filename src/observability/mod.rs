//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`, initialized in `main`
//! - Request ID flows through the HTTP layer (`x-request-id`)
//! - Metrics are cheap counter increments, exported via Prometheus scrape

pub mod metrics;
