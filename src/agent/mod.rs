//! Agent invocation seam.
//!
//! Routing only plans a chain. Actually calling the agents belongs to the
//! caller, through the [`AgentInvoker`] trait. [`ChainRunner`] is the
//! caller-side helper that walks a planned chain in order, feeding each
//! step's output to the next as context, and records the outcome in the
//! delegation log.
//!
//! This module is library-only. The `delegator` binary plans chains but never
//! invokes agents, so nothing in the server or CLI calls [`ChainRunner`].

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

pub mod error;

pub use error::InvocationError;

use crate::history::{DelegationLog, DelegationLogEntry, OutcomeStatus};
use crate::registry::{Agent, AgentRegistry};
use crate::routing::RoutingDecision;

/// Calls a single agent with a task.
///
/// # Object Safety
///
/// This trait is object-safe and designed to be used as `Arc<dyn AgentInvoker>`.
#[async_trait]
pub trait AgentInvoker: Send + Sync + 'static {
    /// Send `task` to `agent`, optionally with the previous step's output.
    ///
    /// # Returns
    ///
    /// - `Ok(String)` with the agent's reply
    /// - `Err(InvocationError::Timeout)` if the provider did not answer in time
    /// - `Err(InvocationError::Unauthorized)` if credentials were rejected
    /// - `Err(InvocationError::RateLimited)` if the provider throttled the call
    async fn invoke(
        &self,
        agent: &Agent,
        task: &str,
        context: Option<&str>,
    ) -> Result<String, InvocationError>;
}

/// Result of one step of an executed chain
#[derive(Debug, Clone, Serialize)]
pub struct StepResult {
    pub agent: String,
    pub elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of running a whole chain
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionReport {
    pub status: OutcomeStatus,
    pub steps: Vec<StepResult>,
    pub elapsed_ms: u64,
}

impl ExecutionReport {
    /// Output of the last successful step.
    pub fn final_output(&self) -> Option<&str> {
        self.steps.iter().rev().find_map(|s| s.output.as_deref())
    }
}

/// Runs planned chains against an invoker
pub struct ChainRunner {
    invoker: Arc<dyn AgentInvoker>,
    registry: Arc<AgentRegistry>,
}

impl ChainRunner {
    pub fn new(invoker: Arc<dyn AgentInvoker>, registry: Arc<AgentRegistry>) -> Self {
        Self { invoker, registry }
    }

    /// Execute every step of the decision's chain in order.
    ///
    /// Stops at the first failing step. No retries are attempted.
    pub async fn run(&self, decision: &RoutingDecision) -> ExecutionReport {
        let started = Instant::now();
        let mut steps = Vec::with_capacity(decision.chain.len());
        let mut context: Option<String> = None;
        let mut status = OutcomeStatus::Completed;

        for key in &decision.chain {
            let step_started = Instant::now();
            let result = match self.registry.lookup(key) {
                Ok(agent) => {
                    self.invoker
                        .invoke(agent, &decision.task, context.as_deref())
                        .await
                }
                Err(_) => Err(InvocationError::Unavailable(key.clone())),
            };
            let elapsed_ms = step_started.elapsed().as_millis() as u64;

            match result {
                Ok(output) => {
                    tracing::debug!(agent = %key, elapsed_ms, "Agent step completed");
                    context = Some(output.clone());
                    steps.push(StepResult {
                        agent: key.clone(),
                        elapsed_ms,
                        output: Some(output),
                        error: None,
                    });
                }
                Err(e) => {
                    tracing::warn!(agent = %key, error = %e, "Agent step failed");
                    steps.push(StepResult {
                        agent: key.clone(),
                        elapsed_ms,
                        output: None,
                        error: Some(e.to_string()),
                    });
                    status = OutcomeStatus::Failed;
                    break;
                }
            }
        }

        ExecutionReport {
            status,
            steps,
            elapsed_ms: started.elapsed().as_millis() as u64,
        }
    }

    /// Execute the chain and append the outcome to the log.
    pub async fn run_and_log(
        &self,
        decision: &RoutingDecision,
        log: &DelegationLog,
    ) -> (ExecutionReport, DelegationLogEntry) {
        let report = self.run(decision).await;
        let entry = log.log_entry(decision.clone(), report.status, Some(report.elapsed_ms));
        (report, entry)
    }
}
