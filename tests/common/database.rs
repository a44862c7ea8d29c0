//! Test database utilities
//!
//! Provides in-memory SQLite database for testing without external dependencies.
//! Each test gets an isolated database instance using SeaORM.

use std::sync::Arc;
use user_service::config::{Config, DatabaseConfig, SyncMode};
use user_service::storage::Database;

use super::fixtures::UserFactory;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new in-memory test database with the `user` table in place
    pub async fn new() -> Self {
        let db = Self::empty().await;
        db.db()
            .sync(SyncMode::Create)
            .await
            .expect("Failed to sync test schema");
        db
    }

    /// Create a new in-memory test database without running sync
    pub async fn empty() -> Self {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create in-memory test database");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Create a test database holding `count` users
    pub async fn seeded(count: usize) -> Self {
        let db = Self::new().await;
        for i in 0..count {
            db.db()
                .create_user(UserFactory::numbered(i))
                .await
                .expect("Failed to seed user");
        }
        db
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Owned handle sharing the same connection pool
    pub fn handle(&self) -> Database {
        self.inner.as_ref().clone()
    }
}

/// Helper to create a simple test database config
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig::sqlite_memory()
}

/// Service configuration pointing at the in-memory database
pub fn test_config() -> Config {
    let mut config = Config::for_environment("test");
    config.database = test_db_config();
    config.database.sync = SyncMode::Create;
    config
}
