//! HTTP route modules

pub mod users;

use crate::utils::error::ServiceError;
use actix_web::web;
use tracing::warn;

/// Register every resource route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    users::configure_routes(cfg);
}

/// JSON extractor configuration
///
/// Body errors go through [`ServiceError`] so they share the error body
/// format of every other failure.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| {
            warn!("Rejected JSON body on {} {}: {}", req.method(), req.path(), err);
            ServiceError::from(err).into()
        })
}

/// Path extractor configuration
///
/// An id that does not parse can never name a stored row, so it is reported
/// as not found.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        ServiceError::not_found(format!("No resource at {}: {}", req.path(), err)).into()
    })
}
