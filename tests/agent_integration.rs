//! Chain execution through the public `AgentInvoker` seam.

mod common;

use async_trait::async_trait;
use common::*;
use delegator::agent::{AgentInvoker, ChainRunner, InvocationError};
use delegator::history::{DelegationLog, OutcomeStatus};
use delegator::registry::{Agent, AgentRegistry};
use delegator::routing::DelegationEngine;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Answers after a fixed delay; times out for one agent.
struct SlowInvoker {
    delay: Duration,
    times_out: Option<&'static str>,
    calls: AtomicUsize,
}

#[async_trait]
impl AgentInvoker for SlowInvoker {
    async fn invoke(
        &self,
        agent: &Agent,
        task: &str,
        context: Option<&str>,
    ) -> Result<String, InvocationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        if self.times_out == Some(agent.key.as_str()) {
            return Err(InvocationError::Timeout(self.delay.as_millis() as u64));
        }
        Ok(match context {
            Some(prev) => format!("{} <- {}", agent.name, prev),
            None => format!("{}: {}", agent.name, task),
        })
    }
}

fn runner(invoker: Arc<SlowInvoker>) -> ChainRunner {
    ChainRunner::new(invoker, Arc::new(AgentRegistry::builtin()))
}

#[tokio::test]
async fn test_full_cycle_completes_and_logs() {
    let invoker = Arc::new(SlowInvoker {
        delay: Duration::from_millis(5),
        times_out: None,
        calls: AtomicUsize::new(0),
    });
    let log = DelegationLog::new();
    let decision = DelegationEngine::default().route(COMPLEX_TASK).unwrap();

    let (report, entry) = runner(invoker.clone()).run_and_log(&decision, &log).await;

    assert_eq!(report.status, OutcomeStatus::Completed);
    assert_eq!(invoker.calls.load(Ordering::SeqCst), 4);
    assert_eq!(
        report.final_output(),
        Some("Dashka <- DeepSeek <- Claude <- Dashka: создать систему для анализа")
    );
    assert!(report.elapsed_ms >= 20);
    assert_eq!(entry.status, OutcomeStatus::Completed);
    assert_eq!(log.recent(1)[0].decision, decision);
}

#[tokio::test]
async fn test_timeout_marks_delegation_failed() {
    let invoker = Arc::new(SlowInvoker {
        delay: Duration::from_millis(1),
        times_out: Some("deepseek"),
        calls: AtomicUsize::new(0),
    });
    let log = DelegationLog::new();
    let decision = DelegationEngine::default().route(MEDIUM_CODING_TASK).unwrap();

    let (report, entry) = runner(invoker).run_and_log(&decision, &log).await;

    assert_eq!(report.status, OutcomeStatus::Failed);
    assert_eq!(report.steps.len(), 2);
    assert!(report.steps[0].error.is_none());
    assert_eq!(
        report.steps[1].error.as_deref(),
        Some("Agent request timeout after 1ms")
    );
    assert_eq!(entry.status, OutcomeStatus::Failed);
    assert_eq!(log.len(), 1);
}
