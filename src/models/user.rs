//! Payloads accepted by the user endpoints

use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};

/// Fields accepted when creating a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
}

impl NewUser {
    pub fn new<S: Into<String>>(username: S) -> Self {
        Self {
            username: username.into(),
            password: None,
            age: None,
        }
    }

    pub fn with_password<S: Into<String>>(mut self, password: S) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_username(&self.username)
    }
}

/// Fields accepted when updating a user
///
/// Only `username` and `age` are writable; anything else in the body,
/// including `password`, is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub age: Option<i32>,
}

impl UserChanges {
    pub fn validate(&self) -> Result<()> {
        match &self.username {
            Some(username) => validate_username(username),
            None => Ok(()),
        }
    }
}

fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(ServiceError::validation("username is required"));
    }
    Ok(())
}
