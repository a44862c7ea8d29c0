// Module declarations
mod connection;
mod schema_sync;
mod types;
mod user_ops;

// Re-export public types
pub use schema_sync::SyncReport;
pub use types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};
