//! Task delegation routing engine
//!
//! Inspects a free-text task, classifies its complexity, selects an ordered
//! chain of agents to hand it through and explains the decision.
//!
//! The pipeline is fixed: classify → build chain → estimate time → explain.
//! Routing is a pure computation over immutable registry data, so a single
//! [`DelegationEngine`] can be shared across any number of request handlers.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod chain;
pub mod complexity;
pub mod error;
pub mod reasoning;

pub use chain::ChainBuilder;
pub use complexity::{classify, TaskComplexity};
pub use error::RoutingError;
pub use reasoning::explain;

use crate::registry::{AgentRegistry, RegistryError, CLAUDE, DASHKA, DEEPSEEK};

/// Version tag of this routing scheme, for client compatibility checks.
pub const ROUTING_LEVEL: u8 = 7;

/// Default estimated minutes of work per agent in a chain.
pub const DEFAULT_MINUTES_PER_AGENT: u32 = 5;

/// Largest accepted per-agent estimate (one day).
pub const MAX_MINUTES_PER_AGENT: u32 = 24 * 60;

/// The complete, immutable outcome of routing one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingDecision {
    /// Original task text, verbatim
    pub task: String,
    pub complexity: TaskComplexity,
    /// Ordered agent keys, never empty
    #[serde(rename = "recommended_chain")]
    pub chain: Vec<String>,
    pub reasoning: String,
    /// Estimated minutes, derived from chain length
    pub estimated_time: u32,
    pub level: u8,
}

impl RoutingDecision {
    /// Number of hand-offs planned.
    pub fn chain_len(&self) -> usize {
        self.chain.len()
    }
}

/// Routes tasks to agent chains
#[derive(Debug, Clone)]
pub struct DelegationEngine {
    registry: Arc<AgentRegistry>,
    minutes_per_agent: u32,
}

impl DelegationEngine {
    /// Create an engine over a registry.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::AgentNotFound` if the registry lacks one of the
    /// coordination, analysis or implementation agents the chain builder
    /// hands off to.
    pub fn new(registry: Arc<AgentRegistry>) -> Result<Self, RegistryError> {
        for key in [DASHKA, CLAUDE, DEEPSEEK] {
            registry.lookup(key)?;
        }
        Ok(Self {
            registry,
            minutes_per_agent: DEFAULT_MINUTES_PER_AGENT,
        })
    }

    /// Override the per-agent time estimate.
    pub fn with_minutes_per_agent(mut self, minutes: u32) -> Self {
        self.minutes_per_agent = minutes;
        self
    }

    pub fn registry(&self) -> &Arc<AgentRegistry> {
        &self.registry
    }

    pub fn minutes_per_agent(&self) -> u32 {
        self.minutes_per_agent
    }

    /// Route a task.
    ///
    /// # Errors
    ///
    /// Returns `RoutingError::InvalidInput` if the task is empty or
    /// whitespace-only. Any other text always routes.
    pub fn route(&self, task: &str) -> Result<RoutingDecision, RoutingError> {
        if task.trim().is_empty() {
            return Err(RoutingError::InvalidInput);
        }

        let normalized = complexity::normalize(task);
        let score = complexity::score(&normalized);
        let complexity = TaskComplexity::from_score(score);
        let chain = ChainBuilder::new(&self.registry).build(&normalized, complexity);
        let estimated_time = self.estimate_minutes(chain.len());
        let reasoning = explain(&chain, &self.registry);

        tracing::debug!(
            score,
            complexity = %complexity,
            chain = ?chain,
            estimated_time,
            "Routed task"
        );

        Ok(RoutingDecision {
            task: task.to_string(),
            complexity,
            chain,
            reasoning,
            estimated_time,
            level: ROUTING_LEVEL,
        })
    }
}

impl DelegationEngine {
    /// Estimated minutes for a chain of `len` agents, saturating at `u32::MAX`.
    pub fn estimate_minutes(&self, len: usize) -> u32 {
        let len = u32::try_from(len).unwrap_or(u32::MAX);
        self.minutes_per_agent.saturating_mul(len)
    }

    /// Check that a decision submitted from outside could have come from
    /// this engine.
    ///
    /// # Errors
    ///
    /// Returns `RoutingError::InvalidInput` for a blank task and
    /// `RoutingError::InvalidDecision` when the chain is empty, names an
    /// unregistered agent, or the time estimate or level do not match.
    pub fn verify(&self, decision: &RoutingDecision) -> Result<(), RoutingError> {
        if decision.task.trim().is_empty() {
            return Err(RoutingError::InvalidInput);
        }
        if decision.chain.is_empty() {
            return Err(RoutingError::InvalidDecision(
                "recommended_chain must not be empty".to_string(),
            ));
        }
        if let Some(key) = decision.chain.iter().find(|k| !self.registry.contains(k)) {
            return Err(RoutingError::InvalidDecision(format!(
                "unknown agent in recommended_chain: {}",
                key
            )));
        }
        if decision.level != ROUTING_LEVEL {
            return Err(RoutingError::InvalidDecision(format!(
                "level must be {}, got {}",
                ROUTING_LEVEL, decision.level
            )));
        }
        let expected = self.estimate_minutes(decision.chain.len());
        if decision.estimated_time != expected {
            return Err(RoutingError::InvalidDecision(format!(
                "estimated_time must be {} for a chain of {}, got {}",
                expected,
                decision.chain.len(),
                decision.estimated_time
            )));
        }
        Ok(())
    }
}

impl Default for DelegationEngine {
    fn default() -> Self {
        Self {
            registry: Arc::new(AgentRegistry::builtin()),
            minutes_per_agent: DEFAULT_MINUTES_PER_AGENT,
        }
    }
}
