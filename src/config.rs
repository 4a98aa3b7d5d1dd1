//! Client configuration resolved at build time.
//!
//! A browser has no process environment, so overrides are read with
//! `option_env!` when the WASM bundle is compiled.
//!
//! Optional:
//! - `VOLUNTEER_LOG_STORAGE_KEY`: `localStorage` key (default `volunteerLogs`)
//! - `VOLUNTEER_LOG_LEVEL`: console log level (default `info`)

use records::{DEFAULT_STORAGE_KEY, StoreConfig};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("storage key must not be empty")]
    EmptyStorageKey,
    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_key: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl AppConfig {
    /// Build config from variables captured when the crate was compiled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a captured value is invalid.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("VOLUNTEER_LOG_STORAGE_KEY"), option_env!("VOLUNTEER_LOG_LEVEL"))
    }

    /// Build config from optional raw values; `None` selects the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a blank storage key or unknown log level.
    pub fn from_values(storage_key: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let storage_key = match storage_key.map(str::trim) {
            None => DEFAULT_STORAGE_KEY.to_owned(),
            Some("") => return Err(ConfigError::EmptyStorageKey),
            Some(key) => key.to_owned(),
        };
        let log_level = match log_level {
            None => DEFAULT_LOG_LEVEL,
            Some(raw) => parse_log_level(raw)?,
        };
        Ok(Self { storage_key, log_level })
    }

    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig { storage_key: self.storage_key.clone() }
    }
}

fn parse_log_level(raw: &str) -> Result<log::Level, ConfigError> {
    raw.trim()
        .parse::<log::Level>()
        .map_err(|_| ConfigError::UnknownLogLevel(raw.to_owned()))
}
