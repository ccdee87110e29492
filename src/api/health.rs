//! Health check endpoint handler.

use crate::api::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_seconds: u64,
    pub agents: usize,
    pub delegations_logged: usize,
    pub routing_enabled: bool,
}

/// GET /health - Return service health.
///
/// The engine has no external dependencies, so a responding process is healthy.
pub async fn handle(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        uptime_seconds: state.metrics_collector.uptime_seconds(),
        agents: state.engine.registry().len(),
        delegations_logged: state.history.len(),
        routing_enabled: state.config.delegation.enabled,
    })
}
