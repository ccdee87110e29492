//! Output formatting helpers for CLI commands

use crate::logging::format_chain;
use crate::registry::Agent;
use crate::routing::{RoutingDecision, TaskComplexity};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

/// Format a routing decision as a two-column table
pub fn format_decision_table(decision: &RoutingDecision) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec![Cell::new("Task"), Cell::new(&decision.task)]);
    table.add_row(vec![
        Cell::new("Complexity"),
        Cell::new(complexity_label(decision.complexity)),
    ]);
    table.add_row(vec![
        Cell::new("Chain"),
        Cell::new(format_chain(&decision.chain)),
    ]);
    table.add_row(vec![Cell::new("Reasoning"), Cell::new(&decision.reasoning)]);
    table.add_row(vec![
        Cell::new("Estimated time"),
        Cell::new(format!("{} min", decision.estimated_time)),
    ]);
    table.add_row(vec![Cell::new("Level"), Cell::new(decision.level)]);

    table.to_string()
}

/// Format a routing decision as JSON
pub fn format_decision_json(decision: &RoutingDecision) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(decision)
}

/// Format agents as a table
pub fn format_agents_table(agents: &[Agent]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Name", "Description", "Skills", "Keywords"]);

    for a in agents {
        table.add_row(vec![
            Cell::new(a.key.bold().to_string()),
            Cell::new(&a.name),
            Cell::new(&a.description),
            Cell::new(a.skills.join(", ")),
            Cell::new(a.keywords.len()),
        ]);
    }

    table.to_string()
}

/// Format agents as JSON
pub fn format_agents_json(agents: &[Agent]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({ "agents": agents }))
}

/// Colored complexity tier label
pub fn complexity_label(complexity: TaskComplexity) -> String {
    match complexity {
        TaskComplexity::Simple => complexity.as_str().green().to_string(),
        TaskComplexity::Medium => complexity.as_str().yellow().to_string(),
        TaskComplexity::Complex => complexity.as_str().red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::AgentRegistry;
    use crate::routing::DelegationEngine;

    #[test]
    fn test_format_decision_table_contains_fields() {
        let decision = DelegationEngine::default()
            .route("создать систему для анализа")
            .unwrap();
        let output = format_decision_table(&decision);
        assert!(output.contains("COMPLEX"));
        assert!(output.contains("dashka → claude → deepseek → dashka"));
        assert!(output.contains("20 min"));
    }

    #[test]
    fn test_format_decision_json_uses_wire_names() {
        let decision = DelegationEngine::default().route("привет, как дела").unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&format_decision_json(&decision).unwrap()).unwrap();
        assert_eq!(parsed["complexity"], "SIMPLE");
        assert_eq!(parsed["recommended_chain"][0], "deepseek");
    }

    #[test]
    fn test_format_agents_table_lists_every_agent() {
        let registry = AgentRegistry::builtin();
        let output = format_agents_table(registry.all());
        assert!(output.contains("Key"));
        assert!(output.contains("DeepSeek"));
        assert!(output.contains("presentation"));
    }

    #[test]
    fn test_format_agents_json_valid() {
        let registry = AgentRegistry::builtin();
        let parsed: serde_json::Value =
            serde_json::from_str(&format_agents_json(registry.all()).unwrap()).unwrap();
        assert_eq!(parsed["agents"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_complexity_label_keeps_text() {
        colored::control::set_override(false);
        assert_eq!(complexity_label(TaskComplexity::Medium), "MEDIUM");
    }
}
