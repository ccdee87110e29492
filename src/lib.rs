//! Delegator - task routing for chains of specialist AI agents
//!
//! This library classifies a free-text task by complexity, plans an ordered
//! chain of agents to hand it to, and keeps a bounded log of past
//! delegations. The HTTP/WebSocket surface, CLI and agent-invocation seam
//! are thin layers over the [`routing::DelegationEngine`].

pub mod agent;
pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod history;
pub mod logging;
pub mod metrics;
pub mod registry;
pub mod routing;
