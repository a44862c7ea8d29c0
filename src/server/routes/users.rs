//! User resource endpoints

use crate::models::{NewUser, UserChanges};
use crate::server::state::AppState;
use crate::utils::error::ServiceError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use tracing::{debug, error, info};

/// Configure user routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::post().to(create_user))
            .route("", web::get().to(list_users))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}

/// Body returned after a successful delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Log anything that is not a plain miss before handing it to actix
fn report(operation: &str, err: ServiceError) -> actix_web::Error {
    if err.is_not_found() {
        debug!("{}: {}", operation, err);
    } else {
        error!("{} failed: {}", operation, err);
    }
    err.into()
}

/// `POST /users`
pub async fn create_user(
    state: web::Data<AppState>,
    payload: web::Json<NewUser>,
) -> ActixResult<HttpResponse> {
    let user = state
        .database
        .create_user(payload.into_inner())
        .await
        .map_err(|e| report("Create user", e))?;

    info!("Created user {} ({})", user.id, user.username);
    Ok(HttpResponse::Ok().json(user))
}

/// `GET /users`
pub async fn list_users(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let users = state
        .database
        .list_users()
        .await
        .map_err(|e| report("List users", e))?;

    Ok(HttpResponse::Ok().json(users))
}

/// `GET /users/{id}`
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> ActixResult<HttpResponse> {
    let user_id = path.into_inner();

    let user = state
        .database
        .find_user_by_id(user_id)
        .await
        .and_then(|user| user.ok_or_else(|| ServiceError::not_found("User not found")))
        .map_err(|e| report("Get user", e))?;

    Ok(HttpResponse::Ok().json(user))
}

/// `PUT /users/{id}`
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    payload: web::Json<UserChanges>,
) -> ActixResult<HttpResponse> {
    let user_id = path.into_inner();

    let user = state
        .database
        .update_user(user_id, payload.into_inner())
        .await
        .map_err(|e| report("Update user", e))?;

    info!("Updated user {}", user.id);
    Ok(HttpResponse::Ok().json(user))
}

/// `DELETE /users/{id}`
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> ActixResult<HttpResponse> {
    let user_id = path.into_inner();

    state
        .database
        .delete_user(user_id)
        .await
        .map_err(|e| report("Delete user", e))?;

    info!("Deleted user {}", user_id);
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "User deleted successfully",
    }))
}
