//! Route command implementation

use crate::cli::output::{format_decision_json, format_decision_table};
use crate::cli::RouteArgs;
use crate::config::DelegatorConfig;
use crate::registry::AgentRegistry;
use crate::routing::DelegationEngine;
use std::sync::Arc;

/// Handle `delegator route` command
///
/// Uses the config file's cost model when the file exists.
pub fn handle_route(args: &RouteArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = if args.config.exists() {
        DelegatorConfig::load(Some(&args.config))?
    } else {
        DelegatorConfig::default()
    };
    config.validate()?;

    let engine = DelegationEngine::new(Arc::new(AgentRegistry::builtin()))?
        .with_minutes_per_agent(config.delegation.minutes_per_agent);
    let decision = engine.route(&args.task)?;

    if args.json {
        Ok(format_decision_json(&decision)?)
    } else {
        Ok(format_decision_table(&decision))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(task: &str, json: bool) -> RouteArgs {
        RouteArgs {
            task: task.to_string(),
            json,
            config: PathBuf::from("nonexistent-delegator.toml"),
        }
    }

    #[test]
    fn test_route_json_output() {
        let output = handle_route(&args("нужна координация интерфейса", true)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["recommended_chain"], serde_json::json!(["dashka"]));
    }

    #[test]
    fn test_route_blank_task_is_error() {
        let err = handle_route(&args("   ", false)).unwrap_err();
        assert_eq!(err.to_string(), "Task text must not be empty");
    }

    #[test]
    fn test_route_uses_config_cost_model() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[delegation]\nminutes_per_agent = 3").unwrap();

        let output = handle_route(&RouteArgs {
            task: "создать систему для анализа".to_string(),
            json: true,
            config: temp.path().to_path_buf(),
        })
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["estimated_time"], 12);
    }

    #[test]
    fn test_route_rejects_out_of_range_cost_model() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[delegation]\nminutes_per_agent = 2000000000").unwrap();

        let err = handle_route(&RouteArgs {
            task: "создать систему для анализа".to_string(),
            json: true,
            config: temp.path().to_path_buf(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("delegation.minutes_per_agent"));
    }
}
