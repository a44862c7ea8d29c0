use crate::config::DatabaseConfig;
use crate::utils::error::{Result, ServiceError};
use sea_orm::*;
use std::time::Duration;
use tracing::{debug, info};

use super::super::entities;
use super::types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};

/// Idle timeout and lifetime for the single in-memory SQLite connection
const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

impl SeaOrmDatabase {
    /// Create a new database connection pool
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("Connecting to database: {}", config.redacted_url());
        let opt = connect_options(config)?;

        let db = Database::connect(opt)
            .await
            .map_err(ServiceError::Database)?;

        let backend_type = DatabaseBackendType::from(db.get_database_backend());
        info!("Database connection established ({})", backend_type);

        Ok(Self { db, backend_type })
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Close the database connection
    pub async fn close(self) -> Result<()> {
        self.db.close().await.map_err(ServiceError::Database)?;
        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");

        self.db.ping().await.map_err(ServiceError::Database)?;

        debug!("Database health check passed");
        Ok(())
    }

    /// Number of rows in the user table
    pub async fn count_users(&self) -> Result<u64> {
        entities::User::find()
            .count(&self.db)
            .await
            .map_err(ServiceError::Database)
    }

    /// Collect database statistics
    pub async fn stats(&self) -> Result<DatabaseStats> {
        Ok(DatabaseStats {
            total_users: self.count_users().await?,
            backend: self.backend_type,
        })
    }
}

/// Pool options for the given configuration
pub(super) fn connect_options(config: &DatabaseConfig) -> Result<ConnectOptions> {
    let url = config.url()?;
    let in_memory = url.starts_with("sqlite::memory:");

    let mut opt = ConnectOptions::new(url);
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(config.connection_timeout))
        .acquire_timeout(Duration::from_secs(30))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    // An in-memory database is dropped with its last connection, so that
    // connection must never be reaped.
    let (idle_timeout, max_lifetime) = if in_memory {
        (IN_MEMORY_CONNECTION_LIFETIME, IN_MEMORY_CONNECTION_LIFETIME)
    } else {
        (Duration::from_secs(600), Duration::from_secs(3600))
    };
    opt.idle_timeout(idle_timeout).max_lifetime(max_lifetime);

    Ok(opt)
}
