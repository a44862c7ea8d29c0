//! Environment variable overrides
//!
//! Values are applied on top of whatever the configuration file provided.

use super::{Config, LogFormat, SyncMode};
use crate::utils::error::{Result, ServiceError};
use std::str::FromStr;
use tracing::debug;

impl Config {
    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port = parse_value("SERVER_PORT", &port)?;
        }
        if let Some(workers) = lookup("SERVER_WORKERS") {
            self.server.workers = Some(parse_value("SERVER_WORKERS", &workers)?);
        }

        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = Some(url);
        }
        if let Some(password) = lookup("DATABASE_PASSWORD") {
            self.database.password = Some(password);
        }
        if let Some(sync) = lookup("DATABASE_SYNC") {
            self.database.sync = parse_value::<SyncMode>("DATABASE_SYNC", &sync)?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.logging.format = parse_value::<LogFormat>("LOG_FORMAT", &format)?;
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| ServiceError::config(format!("Invalid {}: {}", key, e)))
}
