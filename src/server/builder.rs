//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{Result, ServiceError};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| ServiceError::config("Configuration is required"))?;

        HttpServer::new(&config).await
    }
}

/// Connect, sync and serve with the given configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!(
        "Starting user-service {} (environment: {})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    let server = ServerBuilder::new().with_config(config).build().await?;
    info!("Server starting at: http://{}", server.config().address());
    info!("API Endpoints:");
    info!("   GET    /health     - Health check");
    info!("   POST   /users      - Create user");
    info!("   GET    /users      - List users");
    info!("   GET    /users/{{id}} - Get user");
    info!("   PUT    /users/{{id}} - Update user");
    info!("   DELETE /users/{{id}} - Delete user");

    server.start().await
}
