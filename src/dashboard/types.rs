//! Wire messages exchanged with dashboard clients

use serde::{Deserialize, Serialize};

use crate::history::DelegationLogEntry;

/// Message pushed to dashboard clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardMessage {
    /// Sent once on connect, oldest entry first
    InitialData { delegations: Vec<DelegationLogEntry> },
    /// A delegation was appended to the log
    NewDelegation { data: DelegationLogEntry },
    /// Reply to a client ping
    Pong,
}

/// Message received from dashboard clients
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Ping,
}
