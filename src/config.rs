//! Optional TOML configuration.
//!
//! ```toml
//! [output]
//! indent = 0
//! normalization = "none"
//! legend = "out/legend.json"
//!
//! [retry]
//! max_retries = 5
//! base_delay_ms = 1000
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::atomic::RetryPolicy;
use crate::error::ConfigError;
use crate::text::Normalization;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub retry: RetryConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Spaces per JSON nesting level.
    pub indent: usize,
    pub normalization: Normalization,
    /// Where to write the code point legend, if anywhere.
    pub legend: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: 0,
            normalization: Normalization::None,
            legend: None,
        }
    }
}

impl OutputConfig {
    /// These settings with any command-line values laid over them.
    pub fn merged(
        &self,
        normalization: Option<Normalization>,
        indent: Option<usize>,
        legend: Option<PathBuf>,
    ) -> Self {
        Self {
            indent: indent.unwrap_or(self.indent),
            normalization: normalization.unwrap_or(self.normalization),
            legend: legend.or_else(|| self.legend.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_retries: policy.max_retries,
            base_delay_ms: policy.base_delay.as_millis() as u64,
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            base_delay: Duration::from_millis(self.base_delay_ms),
        }
    }
}

impl Config {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
