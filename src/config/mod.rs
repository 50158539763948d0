//! Application configuration
//!
//! Loaded from a JSON file (default `./studentreg.json`) with serde defaults
//! for every field, then overridden by environment variables for the
//! networked database credentials:
//!
//! - `USE_MYSQL=true` selects the MySQL backend
//! - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`
//!
//! A missing config file is not an error; the defaults describe a working
//! embedded-sqlite deployment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::HttpServerConfig;

/// Configuration load errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Storage backend settings
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from a JSON file, falling back to defaults when
    /// the file does not exist, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;
            serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            Self::default()
        };

        config.database.apply_env_overrides();
        Ok(config)
    }
}

/// Which storage engine backs the student store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Embedded single-file engine (default, zero external dependency)
    #[default]
    Sqlite,
    /// Networked relational engine (opt-in, requires host/credentials)
    MySql,
}

/// Storage backend configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatabaseConfig {
    /// Selected backend; MySQL falls back to sqlite if it cannot initialize
    #[serde(default)]
    pub backend: BackendKind,

    #[serde(default)]
    pub sqlite: SqliteConfig,

    #[serde(default)]
    pub mysql: MySqlConfig,
}

impl DatabaseConfig {
    /// Environment variables win over the config file, matching the
    /// deployment convention for database credentials.
    pub fn apply_env_overrides(&mut self) {
        if std::env::var("USE_MYSQL").is_ok_and(|v| v == "true") {
            self.backend = BackendKind::MySql;
        }
        if let Ok(host) = std::env::var("DB_HOST") {
            self.mysql.host = host;
        }
        if let Ok(port) = std::env::var("DB_PORT") {
            if let Ok(port) = port.parse() {
                self.mysql.port = port;
            }
        }
        if let Ok(user) = std::env::var("DB_USER") {
            self.mysql.user = user;
        }
        if let Ok(password) = std::env::var("DB_PASSWORD") {
            self.mysql.password = password;
        }
        if let Ok(database) = std::env::var("DB_NAME") {
            self.mysql.database = database;
        }
    }
}

/// Embedded engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteConfig {
    /// Path to the single database file (created on first use)
    #[serde(default = "default_sqlite_path")]
    pub path: PathBuf,
}

fn default_sqlite_path() -> PathBuf {
    PathBuf::from("./database.sqlite")
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            path: default_sqlite_path(),
        }
    }
}

/// Networked engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MySqlConfig {
    #[serde(default = "default_mysql_host")]
    pub host: String,

    #[serde(default = "default_mysql_port")]
    pub port: u16,

    #[serde(default = "default_mysql_user")]
    pub user: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_mysql_database")]
    pub database: String,
}

fn default_mysql_host() -> String {
    "localhost".to_string()
}

fn default_mysql_port() -> u16 {
    3306
}

fn default_mysql_user() -> String {
    "root".to_string()
}

fn default_mysql_database() -> String {
    "student_registration".to_string()
}

impl Default for MySqlConfig {
    fn default() -> Self {
        Self {
            host: default_mysql_host(),
            port: default_mysql_port(),
            user: default_mysql_user(),
            password: String::new(),
            database: default_mysql_database(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.database.backend, BackendKind::Sqlite);
        assert_eq!(config.database.mysql.port, 3306);
        assert_eq!(
            config.database.sqlite.path,
            PathBuf::from("./database.sqlite")
        );
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/studentreg.json")).unwrap();
        assert_eq!(config.database.backend, BackendKind::Sqlite);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: AppConfig =
            serde_json::from_str(r#"{"database":{"backend":"mysql"}}"#).unwrap();
        assert_eq!(parsed.database.backend, BackendKind::MySql);
        assert_eq!(parsed.database.mysql.host, "localhost");
        assert_eq!(parsed.server.port, default_port_for_test());
    }

    fn default_port_for_test() -> u16 {
        HttpServerConfig::default().port
    }

    #[test]
    fn test_backend_kind_round_trip() {
        let raw = serde_json::to_string(&BackendKind::MySql).unwrap();
        assert_eq!(raw, "\"mysql\"");
        let back: BackendKind = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, BackendKind::MySql);
    }
}
