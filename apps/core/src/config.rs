//! Runtime configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env` file.
//! Every setting has a default, so an empty environment is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::AppError;
use crate::fs_manager::PortablePathManager;

pub const ENV_DATA_DIR: &str = "SCRIPTSMITH_DATA_DIR";
pub const ENV_DB_PATH: &str = "SCRIPTSMITH_DB_PATH";
pub const ENV_STORAGE_QUOTA: &str = "SCRIPTSMITH_STORAGE_QUOTA_BYTES";
pub const ENV_EXPORT_DIR: &str = "SCRIPTSMITH_EXPORT_DIR";
pub const ENV_LOG_FORMAT: &str = "SCRIPTSMITH_LOG_FORMAT";

/// Capacity of the project collection, matching a browser's local-storage budget.
///
/// Measured like the browser does, as UTF-16 code units times two (see
/// [`crate::store::stored_size`]), so Korean text is not penalized for its UTF-8 width.
pub const DEFAULT_STORAGE_QUOTA_BYTES: usize = 5 * 1024 * 1024;

const DB_FILENAME: &str = "scriptsmith.sqlite";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'pretty' or 'json', got '{}'",
                ENV_LOG_FORMAT, other
            ))),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

/// Project store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// SQLite database file
    pub db_path: PathBuf,
    /// Maximum serialized size of the project collection, in bytes
    pub quota_bytes: usize,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root of the data layout
    pub data_dir: PathBuf,
    pub storage: StorageConfig,
    /// Where downloaded scripts are written
    pub export_dir: PathBuf,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Configuration rooted at `data_dir` with every other value defaulted.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            storage: StorageConfig {
                db_path: PortablePathManager::db_dir_in(&data_dir).join(DB_FILENAME),
                quota_bytes: DEFAULT_STORAGE_QUOTA_BYTES,
            },
            export_dir: PortablePathManager::exports_dir_in(&data_dir),
            logging: LoggingConfig::default(),
            data_dir,
        }
    }

    /// Load `.env` (if present) and read the configuration from the environment.
    pub fn load() -> Result<Self, AppError> {
        // A missing .env file is fine
        let _ = dotenv::dotenv();
        Self::from_env()
    }

    /// Read the configuration from the environment only.
    pub fn from_env() -> Result<Self, AppError> {
        let data_dir = env_path(ENV_DATA_DIR).unwrap_or_else(PortablePathManager::data_dir);
        let mut config = Self::with_data_dir(data_dir);

        if let Some(db_path) = env_path(ENV_DB_PATH) {
            config.storage.db_path = db_path;
        }

        if let Some(raw) = env_value(ENV_STORAGE_QUOTA) {
            config.storage.quota_bytes = raw.trim().parse::<usize>().map_err(|e| {
                AppError::Config(format!("{} must be a byte count: {}", ENV_STORAGE_QUOTA, e))
            })?;
            if config.storage.quota_bytes == 0 {
                return Err(AppError::Config(format!(
                    "{} must be greater than zero",
                    ENV_STORAGE_QUOTA
                )));
            }
        }

        if let Some(export_dir) = env_path(ENV_EXPORT_DIR) {
            config.export_dir = export_dir;
        }

        if let Some(raw) = env_value(ENV_LOG_FORMAT) {
            config.logging.format = raw.parse()?;
        }

        Ok(config)
    }

    /// sqlx connection URL for the project store
    pub fn database_url(&self) -> String {
        format!("sqlite://{}", self.storage.db_path.to_string_lossy())
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_path(key: &str) -> Option<PathBuf> {
    env_value(key).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: [&str; 5] = [
        ENV_DATA_DIR,
        ENV_DB_PATH,
        ENV_STORAGE_QUOTA,
        ENV_EXPORT_DIR,
        ENV_LOG_FORMAT,
    ];

    fn cleared() -> Vec<(&'static str, Option<&'static str>)> {
        ALL_KEYS.iter().map(|k| (*k, None)).collect()
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(cleared(), || {
            let config = AppConfig::from_env().unwrap();
            assert_eq!(config.storage.quota_bytes, DEFAULT_STORAGE_QUOTA_BYTES);
            assert_eq!(config.logging.format, LogFormat::Pretty);
            assert!(config.storage.db_path.ends_with("data/db/scriptsmith.sqlite"));
        });
    }

    #[test]
    fn test_overrides() {
        let mut vars = cleared();
        vars.retain(|(k, _)| *k != ENV_DATA_DIR && *k != ENV_STORAGE_QUOTA && *k != ENV_LOG_FORMAT);
        vars.push((ENV_DATA_DIR, Some("/tmp/scriptsmith-test")));
        vars.push((ENV_STORAGE_QUOTA, Some("1024")));
        vars.push((ENV_LOG_FORMAT, Some("JSON")));

        temp_env::with_vars(vars, || {
            let config = AppConfig::from_env().unwrap();
            assert_eq!(config.data_dir, PathBuf::from("/tmp/scriptsmith-test"));
            assert_eq!(
                config.export_dir,
                PathBuf::from("/tmp/scriptsmith-test/exports")
            );
            assert_eq!(config.storage.quota_bytes, 1024);
            assert_eq!(config.logging.format, LogFormat::Json);
        });
    }

    #[test]
    fn test_invalid_quota() {
        let mut vars = cleared();
        vars.retain(|(k, _)| *k != ENV_STORAGE_QUOTA);
        vars.push((ENV_STORAGE_QUOTA, Some("lots")));

        temp_env::with_vars(vars, || {
            assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_invalid_log_format() {
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    }

    #[test]
    fn test_database_url() {
        let config = AppConfig::with_data_dir("/srv/data");
        assert_eq!(
            config.database_url(),
            "sqlite:///srv/data/db/scriptsmith.sqlite"
        );
    }
}
