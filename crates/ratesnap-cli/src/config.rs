use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("config key '{key}' must not be empty")]
    EmptyPath { key: &'static str },
}

/// Resolved locations of the feed and the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(rename = "input-file")]
    pub source_file: PathBuf,
    #[serde(rename = "output-file")]
    pub target_file: PathBuf,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.source_file.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath { key: "input-file" });
        }
        if config.target_file.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath { key: "output-file" });
        }

        Ok(config)
    }
}
