//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/TOML/JSON)
//! - Command-line arguments (applied by the handlers)

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vanadia_schema::{RenderOptions, DEFAULT_MAX_DEPTH};

/// File written by `config init` when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "vanadia.yml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering settings
    pub render: RenderConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LogSettings,
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Deepest schema nesting level rendered before a subtree is omitted
    pub max_depth: usize,

    /// Render without the outer table frame by default
    pub inline: bool,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json, yaml)
    pub format: String,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log level used when no `-v` flag is given
    pub level: String,

    /// Log format (compact, full, json)
    pub format: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            inline: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl RenderConfig {
    /// Renderer options for these settings
    pub fn to_options(&self) -> RenderOptions {
        RenderOptions {
            max_depth: self.max_depth,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config = match extension(path).as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// The first existing file wins. A broken file is an error rather than
    /// being skipped; no file at all yields the defaults.
    pub fn load() -> Result<Self> {
        match Self::resolve_path(None) {
            Some(path) => Self::from_file(&path).map_err(|e| {
                Error::config(format!("failed to load {}: {}", path.display(), e))
            }),
            None => Ok(Self::default()),
        }
    }

    /// Path of the file `load_with_file` reads, if any
    pub fn resolve_path(file: Option<&Path>) -> Option<PathBuf> {
        match file {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_config_paths()
                .into_iter()
                .find(|path| path.is_file()),
        }
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) if !path.exists() => Err(Error::FileNotFound {
                path: path.to_path_buf(),
            }),
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("vanadia.yml"),
            PathBuf::from("vanadia.yaml"),
            PathBuf::from(".vanadia.yml"),
            PathBuf::from("vanadia.json"),
            PathBuf::from("vanadia.toml"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let vanadia_dir = config_dir.join("vanadia");
            paths.push(vanadia_dir.join("config.yaml"));
            paths.push(vanadia_dir.join("config.json"));
            paths.push(vanadia_dir.join("config.toml"));
        }

        paths
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match extension(path).as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::to_string(self)?,
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize as TOML: {}", e)))?,
            _ => serde_json::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
}
