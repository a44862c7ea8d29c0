//! Database storage implementation using SeaORM
//!
//! This module provides database connectivity, schema sync and user
//! operations using SeaORM ORM.

/// Database entities module
pub mod entities;
/// SeaORM database implementation module
pub mod seaorm_db;

// Re-export the main database interface
pub use seaorm_db::SeaOrmDatabase as Database;
pub use seaorm_db::{DatabaseBackendType, DatabaseStats, SyncReport};
