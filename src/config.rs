// Configuration module: loads the per-user file that tells the CLI where
// the webhook API lives and which bearer token to present. The file is read
// fresh on every command invocation and handed to the API client by
// reference, so nothing here is global state.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Failure modes of the loader. Each gets its own variant so callers (and
/// tests) can tell a missing file from a malformed one.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not get home directory")]
    HomeDirUnavailable,

    #[error("could not read config file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("config file is missing required fields: bearer_token or api_url")]
    MissingFields,
}

/// Settings required to talk to the webhook API. Both fields are mandatory;
/// absent keys deserialize to empty strings and are rejected below, so a
/// missing key and an empty value fail the same way.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bearer_token: String,
    #[serde(default)]
    pub api_url: String,
}

impl Config {
    /// Load the config from its fixed per-user location,
    /// `<home>/sanpush/config.yaml`.
    pub fn load() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
        Self::load_from_path(&home.join("sanpush").join("config.yaml"))
    }

    /// Load the config from an explicit path. Used by `load` and by tests.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.bearer_token.is_empty() || config.api_url.is_empty() {
            return Err(ConfigError::MissingFields);
        }

        Ok(config)
    }
}
