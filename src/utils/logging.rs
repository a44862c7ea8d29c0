//! Logging setup
//!
//! Installs a global `tracing` subscriber according to [`LoggingConfig`].
//! `RUST_LOG` takes precedence over the configured level when it is set.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{Result, ServiceError};
use tracing_subscriber::EnvFilter;

/// Build the filter for the given configuration, preferring `RUST_LOG`
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return EnvFilter::try_from_default_env()
            .map_err(|e| ServiceError::config(format!("Invalid RUST_LOG directive: {}", e)));
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| ServiceError::config(format!("Invalid log level '{}': {}", config.level, e)))
}

/// Initialize the global subscriber
///
/// Fails if a subscriber has already been installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;

    let result = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .try_init(),
    };

    result.map_err(|e| ServiceError::internal(format!("Failed to install logger: {}", e)))
}
