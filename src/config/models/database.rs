//! Database configuration

use super::{default_connection_timeout, default_max_connections};
use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// SQL dialect of the configured database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Mysql,
    #[serde(alias = "postgresql")]
    Postgres,
    Sqlite,
}

impl Dialect {
    /// URL scheme understood by the driver
    pub fn scheme(&self) -> &'static str {
        match self {
            Dialect::Mysql => "mysql",
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Port used when the configuration leaves it out
    pub fn default_port(&self) -> Option<u16> {
        match self {
            Dialect::Mysql => Some(3306),
            Dialect::Postgres => Some(5432),
            Dialect::Sqlite => None,
        }
    }
}

/// How the `user` table is brought in line with the entity at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    /// Create the table if it does not exist
    Create,
    /// Create the table if missing, then add any missing columns
    #[default]
    Alter,
    /// Drop and recreate the table
    Force,
}

impl FromStr for SyncMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "create" => Ok(SyncMode::Create),
            "alter" => Ok(SyncMode::Alter),
            "force" => Ok(SyncMode::Force),
            other => Err(format!(
                "unknown sync mode '{}', expected create, alter or force",
                other
            )),
        }
    }
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyncMode::Create => "create",
            SyncMode::Alter => "alter",
            SyncMode::Force => "force",
        };
        f.write_str(name)
    }
}

/// Database configuration for one environment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Full connection URL; takes precedence over the individual parts
    pub url: Option<String>,
    /// SQL dialect
    pub dialect: Dialect,
    /// Database host
    pub host: String,
    /// Database port (dialect default when absent)
    pub port: Option<u16>,
    /// Login name
    pub username: String,
    /// Login password
    pub password: Option<String>,
    /// Database name, or file path for SQLite
    pub database: String,
    /// Maximum connections
    pub max_connections: u32,
    /// Connection timeout in seconds
    pub connection_timeout: u64,
    /// Schema sync mode applied at startup
    pub sync: SyncMode,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            dialect: Dialect::default(),
            host: "127.0.0.1".to_string(),
            port: None,
            username: "root".to_string(),
            password: None,
            database: "database_development".to_string(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
            sync: SyncMode::default(),
        }
    }
}

impl DatabaseConfig {
    /// In-memory SQLite configuration, used by tests
    pub fn sqlite_memory() -> Self {
        Self {
            dialect: Dialect::Sqlite,
            database: ":memory:".to_string(),
            // the shared in-memory database disappears once its last connection closes
            max_connections: 1,
            ..Default::default()
        }
    }

    /// Effective port for network dialects
    pub fn port(&self) -> Option<u16> {
        self.port.or_else(|| self.dialect.default_port())
    }

    /// Build the connection URL
    pub fn url(&self) -> Result<String> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }

        if self.dialect == Dialect::Sqlite {
            return Ok(if self.database == ":memory:" {
                "sqlite::memory:".to_string()
            } else {
                format!("sqlite://{}?mode=rwc", self.database)
            });
        }

        let invalid = |what: &str| ServiceError::config(format!("Invalid database {}", what));

        let mut url = Url::parse(&format!("{}://{}", self.dialect.scheme(), self.host))
            .map_err(|e| ServiceError::config(format!("Invalid database host: {}", e)))?;
        url.set_port(self.port()).map_err(|_| invalid("port"))?;
        url.set_username(&self.username)
            .map_err(|_| invalid("username"))?;
        url.set_password(self.password.as_deref())
            .map_err(|_| invalid("password"))?;
        url.set_path(&format!("/{}", self.database));

        Ok(url.to_string())
    }

    /// Connection URL with the password masked, for logging
    pub fn redacted_url(&self) -> String {
        let Ok(raw) = self.url() else {
            return "<invalid database url>".to_string();
        };

        match Url::parse(&raw) {
            Ok(mut url) if url.password().is_some() => {
                let _ = url.set_password(Some("***"));
                url.to_string()
            }
            _ => raw,
        }
    }
}
