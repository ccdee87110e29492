//! Config command handlers

use crate::cli::ConfigInitArgs;
use std::fs;

const EXAMPLE_CONFIG: &str = include_str!("../../delegator.example.toml");

/// Handle `delegator config init` command
pub fn handle_config_init(args: &ConfigInitArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "File already exists: {}. Use --force to overwrite.",
            args.output.display()
        )
        .into());
    }

    fs::write(&args.output, EXAMPLE_CONFIG)?;

    println!("✓ Configuration file created: {}", args.output.display());
    println!("  Set [delegation] enabled = true to expose routing over HTTP.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DelegatorConfig;

    #[test]
    fn test_config_init_creates_loadable_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("delegator.toml");

        let args = ConfigInitArgs {
            output: output_path.clone(),
            force: false,
        };

        handle_config_init(&args).unwrap();

        let config = DelegatorConfig::load(Some(&output_path)).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_init_no_overwrite() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("delegator.toml");
        std::fs::write(&output_path, "existing").unwrap();

        let args = ConfigInitArgs {
            output: output_path.clone(),
            force: false,
        };

        let err = handle_config_init(&args).unwrap_err();
        assert!(err.to_string().contains("--force"));

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content, "existing");
    }

    #[test]
    fn test_config_init_force_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("delegator.toml");
        std::fs::write(&output_path, "old content").unwrap();

        let args = ConfigInitArgs {
            output: output_path.clone(),
            force: true,
        };

        handle_config_init(&args).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[delegation]"));
    }
}
