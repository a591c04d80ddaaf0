//! Configuration file management
//!
//! Handles finding, loading, and validating configuration files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{LoggerConfig, RunnerConfig};

/// Configuration file locations (in order of precedence)
const CONFIG_LOCATIONS: &[&str] = &[
    "./robot-log.yaml",
    "./robot-log.yml",
    "./.robot-log.yaml",
    "~/.config/robot-log/config.yaml",
    "~/.robot-log.yaml",
];

/// Full configuration file structure
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Version of config file format
    #[serde(default = "default_version")]
    pub version: String,

    /// Log formatting options
    #[serde(default)]
    pub logger: LoggerConfig,

    /// Robot Framework invocation settings
    #[serde(default)]
    pub runner: RunnerConfig,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            version: default_version(),
            logger: LoggerConfig::default(),
            runner: RunnerConfig::default(),
        }
    }
}

impl ConfigFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find configuration file in standard locations
    pub fn find() -> Option<PathBuf> {
        for location in CONFIG_LOCATIONS {
            let path = expand_path(location);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Load configuration from default location
    pub fn load_default() -> Result<Self> {
        if let Some(path) = Self::find() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_yaml_file(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_yaml_file(path) {
            serde_yaml::to_string(self).context("Failed to serialize config")?
        } else {
            serde_json::to_string_pretty(self).context("Failed to serialize config")?
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !["1.0"].contains(&self.version.as_str()) {
            anyhow::bail!("Unsupported config version: {}", self.version);
        }

        if self.logger.separator_length == 0 {
            anyhow::bail!("separator_length must be positive");
        }

        if self.logger.timestamp_format.is_empty() {
            anyhow::bail!("timestamp_format must not be empty");
        }

        if self.runner.robot_binary.is_empty() {
            anyhow::bail!("robot_binary must not be empty");
        }

        Ok(())
    }

    /// Generate example configuration
    pub fn example() -> Self {
        let logger = LoggerConfig::new()
            .with_color("HEADER", "\x1b[36m\x1b[1m")
            .with_color("PASS", "\x1b[32m");

        Self {
            version: default_version(),
            logger,
            runner: RunnerConfig::new()
                .with_suite("tests/login_suite.robot")
                .with_output_dir("results"),
        }
    }
}

/// Expand ~ to home directory
fn expand_path(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Check if file is YAML based on extension
fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}
