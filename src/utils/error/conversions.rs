//! Type conversions for ServiceError

use super::types::ServiceError;
use actix_web::error::JsonPayloadError;
use sea_orm::{DbErr, SqlErr};

impl ServiceError {
    /// Classify an ORM error, lifting unique-key violations into `Conflict`
    pub fn from_db(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                ServiceError::Conflict(format!("Unique constraint violated: {}", detail))
            }
            _ => ServiceError::Database(err),
        }
    }

    /// Classify an error from an update, where zero affected rows means the
    /// row vanished after it was read
    pub fn from_db_update<S: Into<String>>(err: DbErr, not_found: S) -> Self {
        match err {
            DbErr::RecordNotUpdated => ServiceError::NotFound(not_found.into()),
            other => Self::from_db(other),
        }
    }
}

impl From<JsonPayloadError> for ServiceError {
    fn from(err: JsonPayloadError) -> Self {
        ServiceError::Validation(format!("Invalid JSON body: {}", err))
    }
}
