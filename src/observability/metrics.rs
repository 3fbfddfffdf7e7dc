//! Metrics collection and exposition.
//!
//! # Metrics
//! - `guard_webhook_updates_total` (counter): inbound updates by kind
//! - `guard_analysis_total` (counter): model-call outcomes
//! - `guard_replies_total` (counter): outbound messages by outcome
//!
//! # Design Decisions
//! - Counters only; this service has no interesting gauges
//! - Recording is a no-op until the exporter is installed, so library
//!   code and tests never need a recorder

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
///
/// Failure is logged and otherwise ignored: the service runs fine without
/// metrics.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(error) => {
            tracing::error!(error = %error, "Failed to install metrics exporter");
        }
    }
}

/// Count an inbound webhook update.
///
/// `kind` is one of: `text`, `voice`, `unsupported`, `no_message`,
/// `invalid`.
pub fn record_update(kind: &'static str) {
    counter!("guard_webhook_updates_total", "kind" => kind).increment(1);
}

/// Count a model-analysis outcome: `ok`, `malformed`, `empty`, `error`.
pub fn record_analysis(outcome: &'static str) {
    counter!("guard_analysis_total", "outcome" => outcome).increment(1);
}

/// Count an outbound message delivery attempt: `sent` or `failed`.
pub fn record_reply(outcome: &'static str) {
    counter!("guard_replies_total", "outcome" => outcome).increment(1);
}
