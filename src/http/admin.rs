//! Liveness and status handlers for the management surface.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

/// Version and status for `guard-cli`.
pub async fn get_status() -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}
