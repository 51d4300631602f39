//! Configuration for perfindex
//!
//! Read from `config.toml`: an explicit `--config` path, else
//! `$PERFINDEX_CONFIG_DIR/config.toml`, else the platform config directory
//! (`~/.config/perfindex/config.toml` on Linux). A missing discovered file
//! means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{PerfIndexError, Result};

pub use types::{ModelConfig, PerfIndexConfig, DEFAULT_TIMEOUT_MS};

const CONFIG_DIR: &str = "perfindex";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "PERFINDEX_CONFIG_DIR";

impl PerfIndexConfig {
    /// Default location of the config file, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        // Allow environment variable override for testing
        let dir = match std::env::var_os(CONFIG_DIR_ENV_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(dir.join(CONFIG_FILE))
    }

    /// Load an explicit config file, or the default one if present
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a file
    ///
    /// A relative `model.path` is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PerfIndexError::invalid_config(path, format!("failed to read: {}", e)))?;
        let mut config: PerfIndexConfig = toml::from_str(&content)
            .map_err(|e| PerfIndexError::invalid_config(path, e))?;

        if let Some(model_path) = config.model.path.take() {
            config.model.path = Some(match path.parent() {
                Some(base) if model_path.is_relative() => base.join(model_path),
                _ => model_path,
            });
        }

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(mut self, model_path: Option<PathBuf>, timeout_ms: Option<u64>) -> Self {
        if model_path.is_some() {
            self.model.path = model_path;
        }
        if let Some(timeout_ms) = timeout_ms {
            self.model.timeout_ms = timeout_ms;
        }
        self
    }

    /// Inference deadline; `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        match self.model.timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}
