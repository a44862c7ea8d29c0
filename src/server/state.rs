//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::storage::Database;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Both fields are read-only after startup; the database handle wraps the
/// connection pool, which is the only shared mutable resource.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,
    /// Database handle
    pub database: Arc<Database>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, database: Database) -> Self {
        Self {
            config: Arc::new(config),
            database: Arc::new(database),
        }
    }
}
