//! Runtime configuration for the todo core.
//!
//! # Responsibility
//! - Resolve the store backend and logging settings from environment-style
//!   key lookups.
//!
//! # Invariants
//! - Resolution never touches the filesystem; paths are validated by the
//!   component that opens them.
//! - Log levels are normalized before they reach `logging::init_logging`.

use crate::logging::{default_log_level, normalize_level};
use crate::store::json_store::DEFAULT_TASKS_FILE;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const APP_NAME: &str = "Todo App";

pub const ENV_STORE: &str = "TODO_STORE";
pub const ENV_TASKS_FILE: &str = "TODO_TASKS_FILE";
pub const ENV_DB_PATH: &str = "TODO_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "TODO_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TODO_LOG_DIR";

pub const DEFAULT_DB_FILE: &str = "todo.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownStore(String),
    InvalidLogLevel(String),
    RelativeLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStore(value) => write!(
                f,
                "unsupported store `{value}`; expected memory|json|sqlite"
            ),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
            Self::RelativeLogDir(value) => {
                write!(f, "log dir must be an absolute path, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Which persistence backend to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSettings {
    Memory,
    Json(PathBuf),
    Sqlite(PathBuf),
}

impl StoreSettings {
    /// Builds settings from a backend name and an optional path override.
    ///
    /// Without an override, JSON uses `tasks.json` and SQLite uses `todo.db`.
    pub fn parse(kind: &str, path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "json" => Ok(Self::Json(
                path.unwrap_or_else(|| PathBuf::from(DEFAULT_TASKS_FILE)),
            )),
            "sqlite" => Ok(Self::Sqlite(
                path.unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE)),
            )),
            other => Err(ConfigError::UnknownStore(other.to_string())),
        }
    }
}

/// Logger settings consumed by `logging::init_logging`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Normalized level (`trace|debug|info|warn|error`).
    pub level: &'static str,
    /// Absolute directory for rotating log files; `None` logs to stderr.
    pub dir: Option<PathBuf>,
}

impl LogSettings {
    pub fn new(level: &str, dir: Option<PathBuf>) -> Result<Self, ConfigError> {
        let level = normalize_level(level).map_err(ConfigError::InvalidLogLevel)?;
        if let Some(dir) = dir.as_ref().filter(|dir| !dir.is_absolute()) {
            return Err(ConfigError::RelativeLogDir(dir.display().to_string()));
        }
        Ok(Self { level, dir })
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
        }
    }
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    pub store: StoreSettings,
    pub log: LogSettings,
}

impl TodoConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let kind = get(ENV_STORE).unwrap_or_else(|| "json".to_string());
        let path_key = match kind.trim().to_ascii_lowercase().as_str() {
            "sqlite" => ENV_DB_PATH,
            _ => ENV_TASKS_FILE,
        };
        let store = StoreSettings::parse(&kind, get(path_key).map(PathBuf::from))?;

        let level = get(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string());
        let log = LogSettings::new(&level, get(ENV_LOG_DIR).map(PathBuf::from))?;

        Ok(Self { store, log })
    }
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            store: StoreSettings::Json(PathBuf::from(DEFAULT_TASKS_FILE)),
            log: LogSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ConfigError, StoreSettings, TodoConfig, ENV_DB_PATH, ENV_LOG_DIR, ENV_STORE,
        ENV_TASKS_FILE,
    };
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = TodoConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, TodoConfig::default());
    }

    #[test]
    fn sqlite_store_reads_db_path() {
        let config = TodoConfig::from_lookup(lookup_from(&[
            (ENV_STORE, "SQLite"),
            (ENV_DB_PATH, "/var/lib/todo/todo.db"),
        ]))
        .unwrap();
        assert_eq!(
            config.store,
            StoreSettings::Sqlite(PathBuf::from("/var/lib/todo/todo.db"))
        );
    }

    #[test]
    fn json_store_reads_tasks_file() {
        let config = TodoConfig::from_lookup(lookup_from(&[
            (ENV_TASKS_FILE, "/srv/todo/tasks.json"),
            (ENV_DB_PATH, "/srv/todo/ignored.db"),
        ]))
        .unwrap();
        assert_eq!(
            config.store,
            StoreSettings::Json(PathBuf::from("/srv/todo/tasks.json"))
        );
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = TodoConfig::from_lookup(lookup_from(&[(ENV_STORE, "  ")])).unwrap();
        assert_eq!(config.store, StoreSettings::Json(PathBuf::from("tasks.json")));
    }

    #[test]
    fn unknown_store_is_rejected() {
        let err = TodoConfig::from_lookup(lookup_from(&[(ENV_STORE, "redis")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownStore("redis".to_string()));
    }

    #[test]
    fn relative_log_dir_is_rejected() {
        let err = TodoConfig::from_lookup(lookup_from(&[(ENV_LOG_DIR, "logs")])).unwrap_err();
        assert!(matches!(err, ConfigError::RelativeLogDir(_)));
    }
}
