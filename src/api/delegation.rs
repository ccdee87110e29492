//! Routing endpoints behind the enablement gate.

use crate::api::{ApiError, AppState, RouteRequest, RouteResponse, StatusResponse};
use crate::logging::{format_chain, generate_request_id, task_preview};
use crate::routing::ROUTING_LEVEL;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

/// POST /api/delegation/route - Plan a delegation chain for a task.
///
/// Answers 404 without touching the engine while routing is disabled.
pub async fn route(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RouteRequest>, JsonRejection>,
) -> Result<Json<RouteResponse>, ApiError> {
    if !state.config.delegation.enabled {
        state.metrics_collector.record_rejection("disabled");
        return Err(ApiError::not_found("Delegation routing is not enabled"));
    }

    let Json(request) = payload.map_err(|e| {
        state.metrics_collector.record_rejection("malformed_body");
        ApiError::bad_request(&e.body_text())
    })?;

    let request_id = generate_request_id();
    let decision = state.engine.route(&request.task).map_err(|e| {
        state.metrics_collector.record_rejection("invalid_input");
        tracing::debug!(request_id = %request_id, error = %e, "Route request rejected");
        ApiError::bad_request(&e.to_string())
    })?;

    state.metrics_collector.record_route(decision.complexity);
    let preview = task_preview(&request.task, state.config.logging.log_task_preview);
    tracing::info!(
        request_id = %request_id,
        user_id = request.user_id.as_deref().unwrap_or("-"),
        task_preview = preview.as_deref().unwrap_or("<redacted>"),
        complexity = %decision.complexity,
        chain = %format_chain(&decision.chain),
        estimated_time = decision.estimated_time,
        "Task routed"
    );

    Ok(Json(RouteResponse::routed(decision)))
}

/// GET /api/delegation/status - Report gate state and routing scheme.
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        enabled: state.config.delegation.enabled,
        version: env!("CARGO_PKG_VERSION"),
        level: ROUTING_LEVEL,
        agents_available: state.engine.registry().keys(),
        engine_status: "operational",
    })
}
