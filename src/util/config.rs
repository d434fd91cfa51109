//! Configuration file support for fcm-gen.
//!
//! fcm-gen supports two configuration file locations:
//! - Global: `~/.fcm-gen/config.toml` - User-wide defaults
//! - Project: `.fcm-gen/config.toml` - Directory-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ops::format::OutputFormat;

/// File extensions of lines that name files rather than HALs.
pub const DEFAULT_SKIP_EXTENSIONS: &[&str] = &[".xml", ".txt", ".zip", ".pkg"];

/// fcm-gen configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input line filtering
    pub filter: FilterConfig,

    /// Output settings
    pub output: OutputConfig,
}

/// Input filtering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Lines ending in one of these are skipped with a warning
    /// (default: `.xml`, `.txt`, `.zip`, `.pkg`)
    pub skip_extensions: Option<Vec<String>>,
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Value of the `optional` attribute on every `<hal>` (default: true)
    pub optional: Option<bool>,

    /// Output format: "xml" or "json"
    pub format: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.filter.skip_extensions.is_some() {
            self.filter.skip_extensions = other.filter.skip_extensions;
        }

        if other.output.optional.is_some() {
            self.output.optional = other.output.optional;
        }
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
    }

    /// Whether generated HALs are marked optional.
    pub fn optional(&self) -> bool {
        self.output.optional.unwrap_or(true)
    }

    /// Parse the output format from the config string.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.format.as_ref().and_then(|s| s.parse().ok())
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.fcm-gen/config.toml)
/// 2. Global config (~/.fcm-gen/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global fcm-gen config directory (~/.fcm-gen).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".fcm-gen"))
}

/// Get the global config path (~/.fcm-gen/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.fcm-gen/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".fcm-gen").join("config.toml")
}
