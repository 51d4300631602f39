//! Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

/// Default inference deadline in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Top-level perfindex configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PerfIndexConfig {
    /// Model artifact and inference settings
    #[serde(default)]
    pub model: ModelConfig,
}

/// Model artifact and inference settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelConfig {
    /// Path to the model artifact (optional)
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Inference deadline in milliseconds; 0 disables it
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            path: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}
