//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

pub mod database;
pub mod logging;
pub mod server;

pub use database::*;
pub use logging::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    10 * 1024 * 1024 // 10MB
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_log_level() -> String {
    "info".to_string()
}

/// Name of the environment selected when none is given
pub fn default_environment() -> String {
    "development".to_string()
}
