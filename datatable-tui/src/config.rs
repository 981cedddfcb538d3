//! Settings from the config file and command line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use thiserror::Error;

use crate::cli::Cli;
use crate::paths;

/// Config error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("unknown log level {0:?}")]
    LogLevel(String),
    #[error("page size must be at least 1")]
    PageSize,
}

/// Application settings.
///
/// Read from `config.json` in the config directory. Every field is optional in
/// the file; command-line flags override file values.
///
/// ```json
/// { "page_size": 15, "sibling_count": 2, "log_level": "info" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Rows per page.
    pub page_size: usize,
    /// Page buttons on each side of the current page.
    pub sibling_count: usize,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    /// Default data file.
    pub data: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: 10,
            sibling_count: datatable_lib::pagination::DEFAULT_SIBLING_COUNT,
            log_level: "debug".to_string(),
            data: None,
        }
    }
}

impl Config {
    /// Load settings from `path`, or from the default location if it exists.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match paths::config_file() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text, path)
    }

    /// Parse settings; `origin` names the source in errors.
    pub fn from_json(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Override settings with command-line flags.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(page_size) = cli.page_size {
            self.page_size = page_size;
        }
        if let Some(siblings) = cli.siblings {
            self.sibling_count = siblings;
        }
        if let Some(data) = &cli.data {
            self.data = Some(data.clone());
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::PageSize);
        }
        self.level()?;
        Ok(())
    }

    /// The configured log level.
    pub fn level(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
