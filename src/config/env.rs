//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

#![allow(dead_code)]

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "ROBOT_LOG";

/// Configuration read from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Config file from ROBOT_LOG_CONFIG
    pub config_file: Option<String>,
    /// Output variant from ROBOT_LOG_FORMAT (console, file)
    pub format: Option<String>,
    /// Suite path from ROBOT_LOG_SUITE
    pub suite: Option<String>,
    /// Results directory from ROBOT_LOG_OUTPUT_DIR
    pub output_dir: Option<String>,
    /// Verbose from ROBOT_LOG_VERBOSE
    pub verbose: Option<bool>,
    /// Disable colors from ROBOT_LOG_NO_COLOR
    pub no_color: Option<bool>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            config_file: get_env("CONFIG"),
            format: get_env("FORMAT"),
            suite: get_env("SUITE"),
            output_dir: get_env("OUTPUT_DIR"),
            verbose: get_env_bool("VERBOSE"),
            no_color: get_env_bool("NO_COLOR"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.config_file.is_some()
            || self.format.is_some()
            || self.suite.is_some()
            || self.output_dir.is_some()
            || self.verbose.is_some()
            || self.no_color.is_some()
    }

    /// Get suite with fallback
    pub fn suite_or(&self, default: &str) -> String {
        self.suite.clone().unwrap_or_else(|| default.to_string())
    }

    /// Get output directory with fallback
    pub fn output_dir_or(&self, default: &str) -> String {
        self.output_dir
            .clone()
            .unwrap_or_else(|| default.to_string())
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Builder for setting environment variables (useful for testing)
pub struct EnvBuilder {
    vars: Vec<(String, String)>,
}

impl EnvBuilder {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Set suite path
    pub fn suite(mut self, suite: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_SUITE"), suite.into()));
        self
    }

    /// Set output directory
    pub fn output_dir(mut self, dir: impl Into<String>) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_OUTPUT_DIR"), dir.into()));
        self
    }

    /// Set output variant
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_FORMAT"), format.into()));
        self
    }

    /// Set verbose flag
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_VERBOSE"), verbose.to_string()));
        self
    }

    /// Apply environment variables
    pub fn apply(self) {
        for (key, value) in self.vars {
            env::set_var(key, value);
        }
    }

    /// Apply and return guard that restores on drop
    pub fn apply_scoped(self) -> EnvGuard {
        let previous: Vec<_> = self
            .vars
            .iter()
            .map(|(k, _)| (k.clone(), env::var(k).ok()))
            .collect();

        self.apply();

        EnvGuard { previous }
    }
}

impl Default for EnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard that restores environment variables on drop
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_config_default() {
        let config = EnvConfig::default();
        assert!(config.suite.is_none());
        assert!(!config.has_any());
    }

    #[test]
    fn test_env_config_fallback() {
        let config = EnvConfig::default();
        assert_eq!(config.suite_or("test_suite.robot"), "test_suite.robot");
        assert_eq!(config.output_dir_or("results"), "results");
    }

    #[test]
    fn test_env_builder() {
        let _guard = EnvBuilder::new()
            .suite("smoke.robot")
            .output_dir("out")
            .format("file")
            .apply_scoped();

        let config = EnvConfig::load();
        assert_eq!(config.suite, Some("smoke.robot".to_string()));
        assert_eq!(config.output_dir, Some("out".to_string()));
        assert_eq!(config.format, Some("file".to_string()));
        assert!(config.has_any());
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = EnvBuilder::new().verbose(true).apply_scoped();

        let config = EnvConfig::load();
        assert_eq!(config.verbose, Some(true));
    }
}
