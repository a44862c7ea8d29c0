use sea_orm::{DatabaseBackend, DatabaseConnection};
use serde::Serialize;
use std::fmt;

/// SeaORM-based database implementation
#[derive(Debug, Clone)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    /// Backend type indicator
    pub(super) backend_type: DatabaseBackendType,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackendType {
    MySql,
    PostgreSQL,
    SQLite,
}

impl From<DatabaseBackend> for DatabaseBackendType {
    fn from(backend: DatabaseBackend) -> Self {
        match backend {
            DatabaseBackend::MySql => DatabaseBackendType::MySql,
            DatabaseBackend::Postgres => DatabaseBackendType::PostgreSQL,
            DatabaseBackend::Sqlite => DatabaseBackendType::SQLite,
        }
    }
}

impl fmt::Display for DatabaseBackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatabaseBackendType::MySql => "mysql",
            DatabaseBackendType::PostgreSQL => "postgres",
            DatabaseBackendType::SQLite => "sqlite",
        };
        f.write_str(name)
    }
}

/// Database statistics
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseStats {
    /// Total number of users
    pub total_users: u64,
    /// Backend in use
    pub backend: DatabaseBackendType,
}
