//! Storage layer for the service
//!
//! This module provides data persistence through SeaORM.

/// Database storage module
pub mod database;

pub use database::Database;
