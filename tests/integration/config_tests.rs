//! Configuration loading tests

#[cfg(test)]
mod tests {
    use crate::{assert_err, assert_ok};
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use user_service::config::{Config, Dialect, LogFormat, SyncMode, Validate};
    use user_service::ServiceError;

    const SHIPPED_CONFIG: &str = include_str!("../../config/service.yaml");

    #[test]
    fn test_shipped_config_has_every_environment() {
        for env in ["development", "test", "production"] {
            let config = assert_ok!(Config::from_yaml_str(SHIPPED_CONFIG, env));
            assert_ok!(config.validate());
        }

        let dev = assert_ok!(Config::from_yaml_str(SHIPPED_CONFIG, "development"));
        assert_eq!(dev.database.dialect, Dialect::Mysql);
        assert_eq!(dev.database.sync, SyncMode::Alter);
        assert_eq!(
            assert_ok!(dev.database.url()),
            "mysql://root@127.0.0.1:3306/database_development"
        );

        let test = assert_ok!(Config::from_yaml_str(SHIPPED_CONFIG, "test"));
        assert_eq!(assert_ok!(test.database.url()), "sqlite::memory:");
    }

    #[tokio::test]
    async fn test_unknown_environment_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SHIPPED_CONFIG.as_bytes()).unwrap();

        let err = assert_err!(Config::from_file(file.path(), "staging").await);
        assert!(matches!(err, ServiceError::Config(_)));
    }

    #[test]
    fn test_overrides_on_top_of_file() {
        let mut config = assert_ok!(Config::from_yaml_str(SHIPPED_CONFIG, "development"));
        let vars = HashMap::from([
            ("SERVER_PORT", "8081"),
            ("DATABASE_URL", "postgres://u:p@db/users"),
            ("DATABASE_SYNC", "force"),
            ("LOG_FORMAT", "json"),
        ]);

        assert_ok!(config.apply_overrides(|key| vars.get(key).map(|v| v.to_string())));
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.database.sync, SyncMode::Force);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(assert_ok!(config.database.url()), "postgres://u:p@db/users");
    }

    #[test]
    fn test_bad_override_is_rejected() {
        let mut config = Config::default();
        let err = assert_err!(config.apply_overrides(|key| {
            (key == "SERVER_PORT").then(|| "eighty".to_string())
        }));
        assert!(matches!(err, ServiceError::Config(msg) if msg.contains("SERVER_PORT")));
    }

    #[test]
    fn test_validation_catches_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }
}
