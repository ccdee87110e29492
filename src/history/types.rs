//! Type definitions for delegation log entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routing::RoutingDecision;

/// Observed outcome of a delegation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Planned only; no agent has been invoked yet
    Routed,
    /// Every agent in the chain responded
    Completed,
    /// An agent in the chain failed
    Failed,
}

impl OutcomeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeStatus::Routed => "routed",
            OutcomeStatus::Completed => "completed",
            OutcomeStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timestamped record of a past routing decision and its outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelegationLogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub decision: RoutingDecision,
    pub status: OutcomeStatus,
    /// Observed end-to-end response time, if the chain was executed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
}

impl DelegationLogEntry {
    /// Create an entry stamped with a fresh id and the current time.
    pub fn new(
        decision: RoutingDecision,
        status: OutcomeStatus,
        response_time_ms: Option<u64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            decision,
            status,
            response_time_ms,
        }
    }
}
