//! Entity-driven schema sync
//!
//! Derives the `user` table definition from the entity and applies it to
//! the connected database. There is no migration history: the entity is the
//! single source of truth.

use crate::config::SyncMode;
use crate::utils::error::Result;
use sea_orm::sea_query::Table;
use sea_orm::{ConnectionTrait, EntityName, IdenStatic, Iterable, Schema};
use sea_orm_migration::SchemaManager;
use serde::Serialize;
use tracing::{debug, info};

use super::super::entities::user;
use super::types::SeaOrmDatabase;

/// What a sync run changed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// The table was dropped first (`force`)
    pub dropped_table: bool,
    /// The table was created
    pub created_table: bool,
    /// Columns added to an existing table (`alter`)
    pub added_columns: Vec<String>,
}

impl SyncReport {
    /// Whether the run touched the schema at all
    pub fn is_noop(&self) -> bool {
        !self.dropped_table && !self.created_table && self.added_columns.is_empty()
    }
}

impl SeaOrmDatabase {
    /// Bring the `user` table in line with the entity definition
    ///
    /// `alter` only appends columns. SQLite cannot add a `UNIQUE` column
    /// (`username`) or a `NOT NULL` column without a default (`created_at`,
    /// `updated_at`) to an existing table; such tables need `force`.
    pub async fn sync(&self, mode: SyncMode) -> Result<SyncReport> {
        let table = user::Entity.table_name();
        info!("Syncing table '{}' (mode: {})", table, mode);

        let schema = Schema::new(self.db.get_database_backend());
        let manager = SchemaManager::new(&self.db);
        let mut report = SyncReport::default();

        if mode == SyncMode::Force && manager.has_table(table).await? {
            manager
                .drop_table(Table::drop().table(user::Entity).to_owned())
                .await?;
            report.dropped_table = true;
            debug!("Dropped table '{}'", table);
        }

        if !manager.has_table(table).await? {
            manager
                .create_table(schema.create_table_from_entity(user::Entity))
                .await?;
            report.created_table = true;
            info!("Created table '{}'", table);
            return Ok(report);
        }

        if mode == SyncMode::Alter {
            for column in user::Column::iter() {
                let name = column.as_str();
                if manager.has_column(table, name).await? {
                    continue;
                }

                let mut column_def = schema.get_column_def::<user::Entity>(column);
                manager
                    .alter_table(
                        Table::alter()
                            .table(user::Entity)
                            .add_column(&mut column_def)
                            .to_owned(),
                    )
                    .await?;
                info!("Added column '{}' to table '{}'", name, table);
                report.added_columns.push(name.to_string());
            }
        }

        if report.is_noop() {
            debug!("Table '{}' already up to date", table);
        }
        Ok(report)
    }
}
