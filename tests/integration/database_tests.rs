//! Database integration tests
//!
//! Tests database operations using real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::database::test_db_config;
    use crate::common::{TestDatabase, UserFactory};
    use crate::{assert_err, assert_ok};
    use sea_orm::ConnectionTrait;
    use user_service::config::SyncMode;
    use user_service::models::{NewUser, UserChanges};
    use user_service::storage::database::DatabaseBackendType;
    use user_service::storage::Database;
    use user_service::ServiceError;

    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::new().await;
        assert_ok!(db.db().health_check().await);
        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);
    }

    #[tokio::test]
    async fn test_create_user_assigns_id_and_default_age() {
        let db = TestDatabase::new().await;

        let user = assert_ok!(db.db().create_user(UserFactory::create()).await);
        assert!(user.id > 0);
        assert_eq!(user.username, "alice");
        assert_eq!(user.password, None);
        assert_eq!(user.age, 22);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[tokio::test]
    async fn test_create_user_keeps_given_fields() {
        let db = TestDatabase::new().await;

        let user = assert_ok!(db.db().create_user(UserFactory::full()).await);
        assert_eq!(user.password.as_deref(), Some("hunter2"));
        assert_eq!(user.age, 31);

        let stored = assert_ok!(db.db().find_user_by_id(user.id).await).unwrap();
        assert_eq!(stored, user);
    }

    #[tokio::test]
    async fn test_duplicate_username_is_conflict() {
        let db = TestDatabase::new().await;
        assert_ok!(db.db().create_user(UserFactory::create()).await);

        let err = assert_err!(db.db().create_user(UserFactory::create()).await);
        assert!(matches!(err, ServiceError::Conflict(_)), "got {:?}", err);
        assert_eq!(assert_ok!(db.db().count_users().await), 1);
    }

    #[tokio::test]
    async fn test_blank_username_rejected() {
        let db = TestDatabase::new().await;

        let err = assert_err!(db.db().create_user(NewUser::new("  ")).await);
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(assert_ok!(db.db().count_users().await), 0);
    }

    #[tokio::test]
    async fn test_list_users_ordered_by_id() {
        let db = TestDatabase::seeded(3).await;

        let users = assert_ok!(db.db().list_users().await);
        let names: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, ["user0", "user1", "user2"]);
        assert!(users.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_find_missing_user() {
        let db = TestDatabase::new().await;
        assert!(assert_ok!(db.db().find_user_by_id(404).await).is_none());
        assert!(assert_ok!(db.db().find_user_by_username("ghost").await).is_none());
    }

    #[tokio::test]
    async fn test_update_user_only_touches_given_fields() {
        let db = TestDatabase::new().await;
        let user = assert_ok!(db.db().create_user(UserFactory::full()).await);

        let updated = assert_ok!(db.db().update_user(user.id, UserFactory::age_change(40)).await);
        assert_eq!(updated.age, 40);
        assert_eq!(updated.username, "bob");
        assert_eq!(updated.password.as_deref(), Some("hunter2"));
        assert_eq!(updated.created_at, user.created_at);
        assert!(updated.updated_at >= user.updated_at);

        let renamed = assert_ok!(
            db.db()
                .update_user(
                    user.id,
                    UserChanges {
                        username: Some("robert".to_string()),
                        age: None,
                    },
                )
                .await
        );
        assert_eq!(renamed.username, "robert");
        assert_eq!(renamed.age, 40);
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let db = TestDatabase::new().await;

        let err = assert_err!(db.db().update_user(7, UserFactory::age_change(1)).await);
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_to_taken_username_is_conflict() {
        let db = TestDatabase::seeded(2).await;
        let users = assert_ok!(db.db().list_users().await);

        let changes = UserChanges {
            username: Some(users[0].username.clone()),
            age: None,
        };
        let err = assert_err!(db.db().update_user(users[1].id, changes).await);
        assert!(matches!(err, ServiceError::Conflict(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_delete_user() {
        let db = TestDatabase::new().await;
        let user = assert_ok!(db.db().create_user(UserFactory::create()).await);

        assert_ok!(db.db().delete_user(user.id).await);
        assert!(assert_ok!(db.db().find_user_by_id(user.id).await).is_none());

        let err = assert_err!(db.db().delete_user(user.id).await);
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_sync_create_is_idempotent() {
        let db = TestDatabase::empty().await;

        let first = assert_ok!(db.db().sync(SyncMode::Create).await);
        assert!(first.created_table);

        assert_ok!(db.db().create_user(UserFactory::create()).await);
        let second = assert_ok!(db.db().sync(SyncMode::Create).await);
        assert!(second.is_noop());
        assert_eq!(assert_ok!(db.db().count_users().await), 1);
    }

    #[tokio::test]
    async fn test_sync_alter_adds_missing_column() {
        let db = TestDatabase::empty().await;
        let conn = db.db().connection();

        assert_ok!(
            conn.execute_unprepared(
                r#"CREATE TABLE "user" (
                    "id" INTEGER PRIMARY KEY AUTOINCREMENT,
                    "username" VARCHAR NOT NULL UNIQUE,
                    "password" VARCHAR NULL,
                    "created_at" VARCHAR NOT NULL,
                    "updated_at" VARCHAR NOT NULL
                )"#,
            )
            .await
        );
        assert_ok!(
            conn.execute_unprepared(
                r#"INSERT INTO "user" ("username", "created_at", "updated_at")
                   VALUES ('legacy', '2024-01-01T00:00:00+00:00', '2024-01-01T00:00:00+00:00')"#,
            )
            .await
        );

        let report = assert_ok!(db.db().sync(SyncMode::Alter).await);
        assert!(!report.created_table);
        assert_eq!(report.added_columns, vec!["age".to_string()]);

        let legacy = assert_ok!(db.db().find_user_by_username("legacy").await).unwrap();
        assert_eq!(legacy.age, 22);

        let again = assert_ok!(db.db().sync(SyncMode::Alter).await);
        assert!(again.is_noop());
    }

    #[tokio::test]
    async fn test_sync_force_empties_table() {
        let db = TestDatabase::seeded(3).await;
        assert_eq!(assert_ok!(db.db().count_users().await), 3);

        let report = assert_ok!(db.db().sync(SyncMode::Force).await);
        assert!(report.dropped_table);
        assert!(report.created_table);
        assert_eq!(assert_ok!(db.db().count_users().await), 0);

        let user = assert_ok!(db.db().create_user(UserFactory::create()).await);
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_stats() {
        let db = TestDatabase::seeded(2).await;
        let stats = assert_ok!(db.db().stats().await);
        assert_eq!(stats.total_users, 2);
        assert_eq!(stats.backend, DatabaseBackendType::SQLite);
    }

    #[tokio::test]
    async fn test_close_connection() {
        let db = assert_ok!(Database::new(&test_db_config()).await);
        assert_ok!(db.sync(SyncMode::Create).await);
        assert_ok!(db.close().await);
    }
}
