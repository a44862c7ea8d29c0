//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::server::handlers::health_check;
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::Database;
use crate::utils::error::{Result, ServiceError};
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use tracing::info;
use tracing_actix_web::TracingLogger;

/// Value of the `Server` response header
pub const SERVER_HEADER: &str = concat!("user-service/", env!("CARGO_PKG_VERSION"));

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Connect the database, sync the schema and prepare the server
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let database = Database::new(&config.database).await?;
        let report = database.sync(config.database.sync).await?;
        info!(
            "Schema sync finished (dropped: {}, created: {}, added columns: {:?})",
            report.dropped_table, report.created_table, report.added_columns
        );

        Ok(Self::with_database(config, database))
    }

    /// Build the server around an already connected database
    pub fn with_database(config: &Config, database: Database) -> Self {
        Self {
            config: config.server.clone(),
            state: AppState::new(config.clone(), database),
        }
    }

    /// Start the HTTP server and run until shutdown
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} ({} workers)", bind_addr, workers);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| ServiceError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    fn format_bind_error(err: std::io::Error, bind_addr: &str) -> ServiceError {
        if err.kind() == std::io::ErrorKind::AddrInUse {
            ServiceError::config(format!(
                "Address {} is already in use; set SERVER_PORT or server.port to another port",
                bind_addr
            ))
        } else {
            ServiceError::config(format!("Failed to bind to {}: {}", bind_addr, err))
        }
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Create the Actix-web application
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let body_limit = state.config.server.max_body_size;

    App::new()
        .app_data(state)
        .app_data(routes::json_config(body_limit))
        .app_data(routes::path_config())
        .wrap(DefaultHeaders::new().add(("Server", SERVER_HEADER)))
        .wrap(TracingLogger::default())
        .wrap(RequestIdMiddleware)
        .route("/health", web::get().to(health_check))
        .configure(routes::configure_routes)
}
