//! Human-readable explanations of routing decisions

use crate::registry::AgentRegistry;

/// Fixed explanation for chains of three or more agents.
pub const FULL_CYCLE_REASONING: &str = "Complex task → full delegation cycle";

/// Explain a chain using each agent's one-line description.
///
/// Pure: identical chains always produce identical text.
pub fn explain(chain: &[String], registry: &AgentRegistry) -> String {
    match chain {
        [] => String::new(),
        [only] => format!("Simple task → {}", describe(only, registry)),
        [first, second] => format!(
            "Medium complexity → {} + {}",
            describe(first, registry),
            describe(second, registry)
        ),
        _ => FULL_CYCLE_REASONING.to_string(),
    }
}

fn describe<'a>(key: &'a str, registry: &'a AgentRegistry) -> &'a str {
    match registry.lookup(key) {
        Ok(agent) => agent.description.as_str(),
        Err(e) => {
            // Chains are built from the same registry, so this is a builder bug.
            debug_assert!(false, "chain references {}", e);
            tracing::error!(error = %e, "Routing chain references unknown agent");
            key
        }
    }
}
