//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_BACKUP_DIR, DEFAULT_BACKUP_PREFIX, DEFAULT_DATA_FILE};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub storage: StorageSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    /// JSON file holding the full array of user records.
    pub data_file: PathBuf,
    pub backup_dir: PathBuf,
    pub backup_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
    /// Daily-rotated log files are written here when set.
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// Defaults, then `config/default`, then `config/{APP_ENV}`, then the environment
    /// (`APP__PORT`, `STORAGE__DATA_FILE`, ...).
    ///
    /// The environment source has no prefix: a bare `APP`, `STORAGE` or `LOG` variable
    /// replaces that whole table and fails deserialization.
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        Self::with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Defaults overlaid with a single required file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 8000)?
            .set_default("app.name", "user-server")?
            .set_default("storage.data_file", DEFAULT_DATA_FILE)?
            .set_default("storage.backup_dir", DEFAULT_BACKUP_DIR)?
            .set_default("storage.backup_prefix", DEFAULT_BACKUP_PREFIX)?
            .set_default("log.level", "info")?
            .set_default("log.format", "pretty")
    }
}
