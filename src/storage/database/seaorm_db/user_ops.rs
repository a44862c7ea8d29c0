use crate::models::{NewUser, UserChanges};
use crate::utils::error::{Result, ServiceError};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, user};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert a new user and return the stored row
    pub async fn create_user(&self, new_user: NewUser) -> Result<user::Model> {
        new_user.validate()?;
        debug!("Creating user: {}", new_user.username);

        let active_model = user::ActiveModel {
            username: Set(new_user.username),
            password: Set(new_user.password),
            age: Set(new_user.age.unwrap_or(user::DEFAULT_AGE)),
            ..Default::default()
        };

        active_model
            .insert(&self.db)
            .await
            .map_err(ServiceError::from_db)
    }

    /// List every user ordered by ID
    pub async fn list_users(&self) -> Result<Vec<user::Model>> {
        debug!("Listing users");

        entities::User::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)
    }

    /// Find user by ID
    pub async fn find_user_by_id(&self, user_id: i32) -> Result<Option<user::Model>> {
        debug!("Finding user by ID: {}", user_id);

        entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)
    }

    /// Find user by username
    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<user::Model>> {
        debug!("Finding user by username: {}", username);

        entities::User::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)
    }

    /// Overwrite username and/or age of an existing user
    pub async fn update_user(&self, user_id: i32, changes: UserChanges) -> Result<user::Model> {
        changes.validate()?;
        debug!("Updating user: {}", user_id);

        let mut active_model: user::ActiveModel = self
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User not found"))?
            .into();

        if let Some(username) = changes.username {
            active_model.username = Set(username);
        }
        if let Some(age) = changes.age {
            active_model.age = Set(age);
        }

        active_model
            .update(&self.db)
            .await
            .map_err(|e| ServiceError::from_db_update(e, "User not found"))
    }

    /// Delete a user by ID
    pub async fn delete_user(&self, user_id: i32) -> Result<()> {
        debug!("Deleting user: {}", user_id);

        let result = entities::User::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("User not found"));
        }

        Ok(())
    }
}
