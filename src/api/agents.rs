//! Agent registry endpoints.

use crate::api::{ApiError, AppState};
use crate::registry::{Agent, RegistryError};
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

/// GET /api/agents - List agents in registry order.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<Agent>> {
    Json(state.engine.registry().all().to_vec())
}

/// GET /api/agents/:key - Look up one agent.
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<Agent>, ApiError> {
    state
        .engine
        .registry()
        .lookup(&key)
        .map(|agent| Json(agent.clone()))
        .map_err(|e: RegistryError| ApiError::not_found(&e.to_string()))
}
