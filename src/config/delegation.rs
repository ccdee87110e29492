//! Delegation engine configuration

use serde::{Deserialize, Serialize};

use crate::history::DEFAULT_CAPACITY;
use crate::routing::DEFAULT_MINUTES_PER_AGENT;

/// Delegation routing and history settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegationConfig {
    /// Expose routing over HTTP. When false the route endpoint answers 404.
    pub enabled: bool,
    /// Number of delegation log entries retained
    pub history_capacity: usize,
    /// Estimated minutes per agent in a chain
    pub minutes_per_agent: u32,
    /// Default `limit` for recent delegation queries
    pub recent_default_limit: usize,
    /// Entries sent to a dashboard WebSocket on connect
    pub dashboard_initial_entries: usize,
}

impl Default for DelegationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            history_capacity: DEFAULT_CAPACITY,
            minutes_per_agent: DEFAULT_MINUTES_PER_AGENT,
            recent_default_limit: 20,
            dashboard_initial_entries: 10,
        }
    }
}
