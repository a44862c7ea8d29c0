//! HTTP route handlers

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, warn};

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub version: &'static str,
    pub git_hash: &'static str,
    pub database: Cow<'static, str>,
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<u64>,
}

/// Health check endpoint handler
///
/// Answers 200 while the database responds and 503 otherwise.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let database = &state.database;
    let reachable = match database.health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Database health check failed: {}", e);
            false
        }
    };
    let users = if reachable {
        database.stats().await.ok().map(|stats| stats.total_users)
    } else {
        None
    };

    let status = HealthStatus {
        status: Cow::Borrowed(if reachable { "healthy" } else { "unhealthy" }),
        version: env!("CARGO_PKG_VERSION"),
        git_hash: env!("GIT_HASH"),
        database: Cow::Borrowed(if reachable { "up" } else { "down" }),
        backend: database.backend_type().to_string(),
        users,
    };

    if reachable {
        HttpResponse::Ok().json(status)
    } else {
        HttpResponse::ServiceUnavailable().json(status)
    }
}
