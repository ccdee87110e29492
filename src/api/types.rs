//! Request and response types for the delegation API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::history::{DelegationLogEntry, OutcomeStatus};
use crate::routing::RoutingDecision;

/// Body of `POST /api/delegation/route`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteRequest {
    pub task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Routing decision plus the routing status marker.
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    #[serde(flatten)]
    pub decision: RoutingDecision,
    pub status: &'static str,
}

impl RouteResponse {
    pub const ROUTED: &'static str = "routed_successfully";

    pub fn routed(decision: RoutingDecision) -> Self {
        Self {
            decision,
            status: Self::ROUTED,
        }
    }
}

/// Response of `GET /api/delegation/status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub enabled: bool,
    pub version: &'static str,
    pub level: u8,
    pub agents_available: Vec<String>,
    pub engine_status: &'static str,
}

/// Body of `POST /api/delegations/log`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogRequest {
    pub decision: RoutingDecision,
    pub status: OutcomeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogResponse {
    pub status: &'static str,
    pub id: Uuid,
}

/// Query of `GET /api/delegations/recent`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentResponse {
    pub delegations: Vec<DelegationLogEntry>,
    /// Entries currently retained (evicted entries are not counted)
    pub total: usize,
}

/// Error response envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: ApiErrorBody,
}

/// Error details.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    /// Create a bad request error (400).
    pub fn bad_request(message: &str) -> Self {
        Self {
            error: ApiErrorBody {
                message: message.to_string(),
                r#type: "invalid_request_error".to_string(),
                code: Some("invalid_request_error".to_string()),
            },
        }
    }

    /// Create a not found error (404).
    pub fn not_found(message: &str) -> Self {
        Self {
            error: ApiErrorBody {
                message: message.to_string(),
                r#type: "invalid_request_error".to_string(),
                code: Some("not_found".to_string()),
            },
        }
    }

    /// Get the HTTP status code for this error.
    fn status_code(&self) -> StatusCode {
        match self.error.code.as_deref() {
            Some("invalid_request_error") => StatusCode::BAD_REQUEST,
            Some("not_found") => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
