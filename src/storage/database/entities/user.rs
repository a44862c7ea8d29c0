use async_trait::async_trait;
use chrono::Utc;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Age stored when a new user does not provide one
pub const DEFAULT_AGE: i32 = 22;

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    /// User ID (auto-increment)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Username (unique)
    #[sea_orm(unique)]
    pub username: String,

    /// Password, stored as given
    pub password: Option<String>,

    /// Age
    #[sea_orm(default_value = 22)]
    pub age: i32,

    /// Creation timestamp
    pub created_at: DateTimeUtc,

    /// Last update timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Maintain `created_at`/`updated_at` on every save
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        if insert {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}
