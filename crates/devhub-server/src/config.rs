//! Server configuration
//!
//! Read from Shuttle secrets (`Secrets.toml`):
//! - `DEVHUB_STORAGE`: `postgres` (default) or `memory`
//! - `DEVHUB_RUN_MIGRATIONS`: run sqlx migrations at startup (default `true`)
//! - `DEVHUB_CORS_PERMISSIVE`: allow any origin (default `true`)

use shuttle_runtime::SecretStore;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Storage backend for the Developer repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Postgres => write!(f, "postgres"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            _ => Err(format!("Unknown storage backend: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub run_migrations: bool,
    pub cors_permissive: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::default(),
            run_migrations: true,
            cors_permissive: true,
        }
    }
}

impl AppConfig {
    pub fn from_secrets(secrets: &SecretStore) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Build from any key/value source; missing keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let storage = match lookup("DEVHUB_STORAGE") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "DEVHUB_STORAGE",
                value,
                reason: "expected postgres or memory",
            })?,
            None => defaults.storage,
        };

        Ok(Self {
            storage,
            run_migrations: parse_flag(&lookup, "DEVHUB_RUN_MIGRATIONS", defaults.run_migrations)?,
            cors_permissive: parse_flag(
                &lookup,
                "DEVHUB_CORS_PERMISSIVE",
                defaults.cors_permissive,
            )?,
        })
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                key,
                value,
                reason: "expected true or false",
            }),
        },
    }
}
