//! Agent Registry module.
//!
//! Provides the immutable catalog of agents that tasks can be delegated to.

mod agent;
mod error;

pub use agent::*;
pub use error::*;

use std::collections::HashMap;

/// The Agent Registry stores all known agents in declaration order.
///
/// The registry is built once at startup and never mutated afterwards, so it
/// can be shared freely across threads behind an `Arc` without locking.
///
/// # Examples
///
/// ```
/// use delegator::registry::AgentRegistry;
///
/// let registry = AgentRegistry::builtin();
/// assert_eq!(registry.len(), 3);
/// assert_eq!(registry.lookup("claude").unwrap().name, "Claude");
/// ```
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    agents: Vec<Agent>,
    index: HashMap<String, usize>,
}

impl AgentRegistry {
    /// Build a registry from agents in the given order.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateAgent` if two agents share a key.
    pub fn new(agents: Vec<Agent>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(agents.len());
        for (position, agent) in agents.iter().enumerate() {
            if index.insert(agent.key.clone(), position).is_some() {
                return Err(RegistryError::DuplicateAgent(agent.key.clone()));
            }
        }
        Ok(Self { agents, index })
    }

    /// Registry seeded with the built-in dashka, claude and deepseek agents.
    pub fn builtin() -> Self {
        let agents = builtin_agents();
        let index = agents
            .iter()
            .enumerate()
            .map(|(position, agent)| (agent.key.clone(), position))
            .collect();
        Self { agents, index }
    }

    /// Look up an agent by key.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::AgentNotFound` if no agent has the given key.
    pub fn lookup(&self, key: &str) -> Result<&Agent, RegistryError> {
        self.index
            .get(key)
            .map(|&position| &self.agents[position])
            .ok_or_else(|| RegistryError::AgentNotFound(key.to_string()))
    }

    /// All agents in Registry (insertion) order.
    pub fn all(&self) -> &[Agent] {
        &self.agents
    }

    /// All agent keys in Registry order.
    pub fn keys(&self) -> Vec<String> {
        self.agents.iter().map(|a| a.key.clone()).collect()
    }

    /// Returns true if an agent with this key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of registered agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Returns true if the registry has no agents.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
