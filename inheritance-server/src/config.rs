//! Server configuration read from a TOML file.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! server on `127.0.0.1:8080` backed by the in-memory store.
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:8080"
//!
//! [store]
//! backend = "memory"
//!
//! [logging]
//! level = "debug"
//! file = "inheritance-server.log"
//!
//! [tax]
//! schedule_file = "brackets_2025.csv"
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use inheritance_core::db::StoreConfig;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
    pub tax: TaxConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Any `EnvFilter` directive. `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Log records are appended here in addition to stdout.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TaxConfig {
    /// Rate schedule CSV used instead of the built-in 2025 brackets.
    pub schedule_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_toml(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &contents)
    }
}
