//! Configuration module for the delegator
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`DELEGATOR_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use delegator::config::DelegatorConfig;
//!
//! let config = DelegatorConfig::default();
//! assert_eq!(config.server.port, 8000);
//! assert!(!config.delegation.enabled);
//!
//! let toml = r#"
//! [delegation]
//! enabled = true
//! "#;
//! let config: DelegatorConfig = toml::from_str(toml).unwrap();
//! assert!(config.delegation.enabled);
//! ```

pub mod delegation;
pub mod error;
pub mod logging;
pub mod server;

pub use delegation::DelegationConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::routing::MAX_MINUTES_PER_AGENT;

/// Serializes tests that touch `DELEGATOR_*` environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Unified configuration for the delegator service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DelegatorConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Routing gate, cost model and history settings
    pub delegation: DelegationConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl DelegatorConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports DELEGATOR_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var("DELEGATOR_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("DELEGATOR_HOST") {
            self.server.host = host;
        }

        if let Ok(level) = std::env::var("DELEGATOR_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("DELEGATOR_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        if let Ok(enabled) = std::env::var("DELEGATOR_ROUTING_ENABLED") {
            self.delegation.enabled = enabled.to_lowercase() == "true";
        }
        if let Ok(capacity) = std::env::var("DELEGATOR_HISTORY_CAPACITY") {
            if let Ok(c) = capacity.parse() {
                self.delegation.history_capacity = c;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }

        if self.server.cors_allow_origins.is_empty() {
            return Err(ConfigError::Validation {
                field: "server.cors_allow_origins".to_string(),
                message: "at least one origin (or \"*\") is required".to_string(),
            });
        }

        if self.delegation.history_capacity == 0 {
            return Err(ConfigError::Validation {
                field: "delegation.history_capacity".to_string(),
                message: "capacity must be non-zero".to_string(),
            });
        }

        if self.delegation.minutes_per_agent == 0 {
            return Err(ConfigError::Validation {
                field: "delegation.minutes_per_agent".to_string(),
                message: "estimate must be non-zero".to_string(),
            });
        }

        if self.delegation.minutes_per_agent > MAX_MINUTES_PER_AGENT {
            return Err(ConfigError::Validation {
                field: "delegation.minutes_per_agent".to_string(),
                message: format!("estimate must be at most {}", MAX_MINUTES_PER_AGENT),
            });
        }

        Ok(())
    }
}
