//! Configuration validation

use super::models::*;
use super::Config;
use crate::utils::error::{Result, ServiceError};
use tracing::debug;

/// Validation hook implemented by every configuration section
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        if self.environment.trim().is_empty() {
            return Err(ServiceError::config("Environment name cannot be empty"));
        }

        self.server.validate()?;
        self.database.validate()?;
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(ServiceError::config("Server host cannot be empty"));
        }

        if self.port == 0 {
            return Err(ServiceError::config("Server port must be greater than 0"));
        }

        if self.workers == Some(0) {
            return Err(ServiceError::config("Worker count must be greater than 0"));
        }

        if self.max_body_size == 0 {
            return Err(ServiceError::config("Max body size must be greater than 0"));
        }

        Ok(())
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<()> {
        if self.max_connections == 0 {
            return Err(ServiceError::config(
                "Database max connections must be greater than 0",
            ));
        }

        if self.connection_timeout == 0 {
            return Err(ServiceError::config(
                "Database connection timeout must be greater than 0",
            ));
        }

        if self.url.is_none() {
            if self.database.trim().is_empty() {
                return Err(ServiceError::config("Database name cannot be empty"));
            }
            if self.dialect != Dialect::Sqlite && self.host.trim().is_empty() {
                return Err(ServiceError::config("Database host cannot be empty"));
            }
        }

        self.url().map(|_| ())
    }
}
