//! # user-service
//!
//! A small HTTP service exposing create, read, update and delete endpoints
//! for a single `user` table, built on actix-web and SeaORM.
//!
//! ## Features
//!
//! - **Entity-driven schema**: the `user` table is created or extended at
//!   startup from the entity definition (`create`, `alter` or `force`)
//! - **Multiple backends**: MySQL (default), PostgreSQL and SQLite
//! - **Per-environment configuration**: one YAML file, one database section
//!   per environment, environment-variable overrides
//! - **Structured logging**: `tracing` with text or JSON output
//!
//! ## Embedding the server
//!
//! ```rust,no_run
//! use user_service::{Config, run_server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/service.yaml", "development").await?;
//!     run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod models;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::{Config, DatabaseConfig, SyncMode};
pub use models::{NewUser, UserChanges};
pub use server::{AppState, HttpServer, create_app, run_server};
pub use storage::Database;
pub use storage::database::entities::user::Model as User;
pub use utils::error::{Result, ServiceError};
