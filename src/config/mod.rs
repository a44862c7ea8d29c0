//! Configuration management for the service
//!
//! A configuration file holds the server and logging sections plus one
//! database section per environment. The active environment is picked at
//! startup; environment variables may then override individual values.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// On-disk layout of the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Database configuration keyed by environment name
    pub databases: BTreeMap<String, DatabaseConfig>,
}

/// Resolved configuration for one environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the active environment
    pub environment: String,
    /// Server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Database configuration of the active environment
    pub database: DatabaseConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::for_environment(&default_environment())
    }
}

impl Config {
    /// Built-in defaults for the given environment
    pub fn for_environment(environment: &str) -> Self {
        Self {
            environment: environment.to_string(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            database: DatabaseConfig::default(),
        }
    }

    /// Parse a YAML document and select the given environment
    pub fn from_yaml_str(content: &str, environment: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)
            .map_err(|e| ServiceError::config(format!("Failed to parse config: {}", e)))?;
        Self::from_config_file(file, environment)
    }

    /// Select the given environment from a parsed file
    pub fn from_config_file(mut file: ConfigFile, environment: &str) -> Result<Self> {
        let database = file.databases.remove(environment).ok_or_else(|| {
            ServiceError::config(format!(
                "No database configuration for environment '{}'",
                environment
            ))
        })?;

        Ok(Self {
            environment: environment.to_string(),
            server: file.server,
            logging: file.logging,
            database,
        })
    }

    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P, environment: &str) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;
        let config = Self::from_yaml_str(&content, environment)?;

        debug!("Configuration loaded for environment '{}'", environment);
        Ok(config)
    }

    /// Load the file (or defaults when it is missing), apply environment
    /// overrides and validate the result.
    pub async fn load<P: AsRef<Path>>(path: P, environment: &str) -> Result<Self> {
        let path = path.as_ref();
        let mut config = match Self::from_file(path, environment).await {
            Ok(config) => config,
            Err(ServiceError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "Configuration file {:?} not found, using built-in defaults",
                    path
                );
                Self::for_environment(environment)
            }
            Err(e) => return Err(e),
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }
}
