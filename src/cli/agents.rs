//! Agents command implementation

use crate::cli::output::{format_agents_json, format_agents_table};
use crate::cli::AgentsArgs;
use crate::registry::AgentRegistry;

/// Handle `delegator agents` command
pub fn handle_agents(
    args: &AgentsArgs,
    registry: &AgentRegistry,
) -> Result<String, Box<dyn std::error::Error>> {
    if args.json {
        Ok(format_agents_json(registry.all())?)
    } else {
        Ok(format_agents_table(registry.all()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agents_json_keeps_registry_order() {
        let registry = AgentRegistry::builtin();
        let output = handle_agents(&AgentsArgs { json: true }, &registry).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let keys: Vec<_> = parsed["agents"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["key"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(keys, vec!["dashka", "claude", "deepseek"]);
    }

    #[test]
    fn test_agents_table() {
        let registry = AgentRegistry::builtin();
        let output = handle_agents(&AgentsArgs { json: false }, &registry).unwrap();
        assert!(output.contains("Claude"));
    }
}
