use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, SyncMode, default_environment};
use crate::utils::error::Result;

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/service.yaml";

#[derive(Parser, Debug)]
#[command(
    name = "user-service",
    author,
    version,
    about = "CRUD HTTP service for a single user table."
)]
pub struct Cli {
    /// Path to the YAML configuration file.
    #[arg(
        long,
        value_name = "PATH",
        env = "USER_SERVICE_CONFIG",
        default_value = DEFAULT_CONFIG_PATH
    )]
    pub config: PathBuf,

    /// Environment whose database section is used.
    #[arg(long = "env", value_name = "NAME", env = "APP_ENV", default_value_t = default_environment())]
    pub environment: String,

    /// Schema sync mode (create, alter or force); overrides the configuration.
    #[arg(long, value_name = "MODE")]
    pub sync: Option<SyncMode>,
}

impl Cli {
    /// Load the configuration these flags point at
    pub async fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(&self.config, &self.environment).await?;
        if let Some(sync) = self.sync {
            config.database.sync = sync;
        }
        Ok(config)
    }
}
