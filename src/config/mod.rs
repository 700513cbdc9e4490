//! Configuration loading and management

use crate::core::error::{ConfigError, ScopeResult};
use serde::{Deserialize, Serialize};

/// Environment variable naming a YAML config file to load
pub const CONFIG_ENV: &str = "SALESCOPE_CONFIG";

/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "PORT";

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Address to listen on
    pub bind_addr: String,

    /// Path to the JSON dataset file loaded at startup
    pub dataset: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".to_string(),
            dataset: "data/transactions.json".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> ScopeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::ParseError {
                file: Some(path.to_string()),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> ScopeResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from the environment
    ///
    /// Reads the file named by `SALESCOPE_CONFIG` when set, otherwise
    /// starts from defaults. A `PORT` variable overrides the configured
    /// port either way.
    pub fn load() -> ScopeResult<Self> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(port) = std::env::var(PORT_ENV) {
            let port: u16 = port.parse().map_err(|_| ConfigError::InvalidValue {
                field: PORT_ENV.to_string(),
                value: port.clone(),
                message: "expected a port number".to_string(),
            })?;
            let host = config
                .bind_addr
                .rsplit_once(':')
                .map_or("0.0.0.0", |(host, _)| host)
                .to_string();
            config.bind_addr = format!("{host}:{port}");
        }

        Ok(config)
    }
}
