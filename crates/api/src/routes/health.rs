//! Health check endpoint handlers.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalog: CatalogHealth,
}

/// Seeded catalog status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogHealth {
    pub seeded: bool,
    pub deals: usize,
    pub groups: usize,
    pub latency_simulation: bool,
}

/// Simple status response for liveness/readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Full health check endpoint.
///
/// Reports the seeded catalog and whether latency simulation is active.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let seeded = state.catalog.deal_count() > 0;

    Json(HealthResponse {
        status: if seeded { "healthy" } else { "unhealthy" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog: CatalogHealth {
            seeded,
            deals: state.catalog.deal_count(),
            groups: state.catalog.group_count(),
            latency_simulation: state.catalog.latency().is_enabled(),
        },
    })
}

/// Readiness probe endpoint.
///
/// The service is ready once the fixture catalog is seeded, which happens
/// before the listener starts; this always reports ready.
pub async fn ready() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ready".to_string(),
    })
}

/// Liveness probe endpoint.
///
/// Returns 200 OK if the process is running.
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}
