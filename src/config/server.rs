//! Server configuration

use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
    /// Allowed CORS origins; `"*"` allows any origin
    pub cors_allow_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            request_timeout_seconds: 30,
            cors_allow_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    /// Returns true if any origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allow_origins.iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.request_timeout_seconds, 30);
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_explicit_origins_are_not_wildcard() {
        let config = ServerConfig {
            cors_allow_origins: vec!["http://localhost:3000".to_string()],
            ..ServerConfig::default()
        };
        assert!(!config.allows_any_origin());
    }
}
