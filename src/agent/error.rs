//! Error types for agent invocation.

use thiserror::Error;

/// Errors an agent invocation can fail with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    /// Request exceeded deadline.
    #[error("Agent request timeout after {0}ms")]
    Timeout(u64),

    /// Credentials missing or rejected by the provider.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Provider throttled the request.
    #[error("Rate limited (retry after {retry_after_secs:?}s)")]
    RateLimited { retry_after_secs: Option<u64> },

    /// Provider returned an error response.
    #[error("Agent error {status}: {message}")]
    Upstream { status: u16, message: String },

    /// No invoker is wired up for this agent.
    #[error("Agent '{0}' is unavailable")]
    Unavailable(String),
}
