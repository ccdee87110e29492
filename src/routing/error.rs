//! Error types for routing failures

use thiserror::Error;

/// Errors that can occur while routing a task
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoutingError {
    /// Task text was empty or whitespace-only
    #[error("Task text must not be empty")]
    InvalidInput,

    /// A submitted decision is inconsistent with the engine's rules
    #[error("Invalid routing decision: {0}")]
    InvalidDecision(String),
}
