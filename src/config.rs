//! callwrap.toml configuration
//!
//! # Example callwrap.toml
//!
//! ```toml
//! [wrap]
//! count = true
//! time = true
//! trace = false
//!
//! [output]
//! log_file = "log.txt"
//! ```
//!
//! Missing sections and keys fall back to their defaults.

use crate::error::{CallWrapError, Result};
use crate::options::WrapOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "callwrap.toml";

/// Default append-mode log file used by the redirection demo
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Root configuration for callwrap.toml
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Options applied to wrappers built by the demos
    pub wrap: WrapOptions,
    /// Output settings
    pub output: OutputConfig,
}

/// `[output]` section
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// File that receives a copy of redirected output
    pub log_file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use callwrap::config::Config;
    ///
    /// # fn main() -> callwrap::error::Result<()> {
    /// let config = Config::from_file("callwrap.toml")?;
    /// println!("log file: {}", config.output.log_file.display());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CallWrapError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CallWrapError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Load `path` if given, else `callwrap.toml` when present, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    tracing::debug!(path = %default.display(), "loading default config");
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
