//! Integration tests for user-service
//!
//! These tests run against a real in-memory SQLite database and the full
//! actix application, without mocking.

pub mod config_tests;
pub mod database_tests;
