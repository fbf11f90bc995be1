// crates/countries-core/src/config.rs

//! Configuration loading with figment: defaults, then an optional TOML
//! file, then `COUNTRIES_`-prefixed environment variables.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{DirectoryError, Result};
use crate::source::{default_data_path, DataLocation};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "countries.toml";

/// Prefix of environment overrides; nested keys are split on `__`,
/// e.g. `COUNTRIES_DATA__LOCATION`.
pub const ENV_PREFIX: &str = "COUNTRIES_";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub log: LogConfig,
}

/// Where the dataset lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// File path or `http(s)://` URL of the dataset.
    /// Defaults to the sample dataset shipped with this crate.
    pub location: String,
}

/// Logging defaults; `RUST_LOG` still wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// A `tracing` level name: error, warn, info, debug or trace.
    pub level: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            location: default_data_path().display().to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

impl Config {
    /// Load from `countries.toml` in the working directory and the
    /// environment.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load with an optional explicit config file.
    ///
    /// A missing file is not an error; figment treats it as empty.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self> {
        let file = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        Self::from_figment(Self::figment(&file))
    }

    /// The provider stack, exposed so callers can layer more on top.
    pub fn figment(config_file: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract()?;
        config.validate()?;
        tracing::debug!(location = %config.data.location, "configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.data.location.trim().is_empty() {
            return Err(DirectoryError::invalid_config("data.location is empty"));
        }
        let level = self.log.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(DirectoryError::invalid_config(format!(
                "log.level must be one of {}, got {:?}",
                LOG_LEVELS.join(", "),
                self.log.level
            )));
        }
        Ok(())
    }

    pub fn data_location(&self) -> DataLocation {
        DataLocation::parse(&self.data.location)
    }
}
