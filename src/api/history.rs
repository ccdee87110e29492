//! Delegation log endpoints.

use crate::api::{ApiError, AppState, LogRequest, LogResponse, RecentQuery, RecentResponse};
use crate::dashboard::create_new_delegation_update;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use std::sync::Arc;

/// POST /api/delegations/log - Record a delegation outcome.
///
/// The decision must be one this engine could have produced. The stored
/// entry is broadcast to connected dashboards.
pub async fn log(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LogRequest>, JsonRejection>,
) -> Result<Json<LogResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(&e.body_text()))?;

    if let Err(e) = state.engine.verify(&request.decision) {
        tracing::warn!(error = %e, "Rejected delegation log entry");
        return Err(ApiError::bad_request(&e.to_string()));
    }

    let entry = state
        .history
        .log_entry(request.decision, request.status, request.response_time_ms);
    state
        .metrics_collector
        .record_logged(&entry, state.history.len());

    tracing::info!(
        id = %entry.id,
        status = %entry.status,
        complexity = %entry.decision.complexity,
        response_time_ms = ?entry.response_time_ms,
        "Delegation logged"
    );

    let id = entry.id;
    // No subscribers is not an error
    let _ = state.ws_broadcast.send(create_new_delegation_update(entry));

    Ok(Json(LogResponse {
        status: "logged",
        id,
    }))
}

/// GET /api/delegations/recent - Most recent entries, oldest first.
pub async fn recent(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RecentQuery>, QueryRejection>,
) -> Result<Json<RecentResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::bad_request(&e.body_text()))?;
    let limit = query
        .limit
        .unwrap_or(state.config.delegation.recent_default_limit)
        .min(state.history.capacity());

    Ok(Json(RecentResponse {
        delegations: state.history.recent(limit),
        total: state.history.len(),
    }))
}
