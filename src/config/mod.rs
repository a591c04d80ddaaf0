//! Configuration module
//!
//! Handles loading and managing logger and runner configuration.

#![allow(dead_code)]

mod env;
mod file;

pub use env::{EnvBuilder, EnvConfig, EnvGuard};
pub use file::ConfigFile;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Formatting options for the log engine
///
/// Constructed once and shared read-only by all formatters. Every field
/// has a default so a partial config file never fails to load.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Apply ANSI decoration to console output
    #[serde(default = "default_true")]
    pub use_colors: bool,

    /// Include the timestamp field
    #[serde(default = "default_true")]
    pub show_timestamp: bool,

    /// strftime pattern for the timestamp field
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Include the current test name field
    #[serde(default = "default_true")]
    pub show_test_name: bool,

    /// Include the bracketed log level field
    #[serde(default = "default_true")]
    pub show_log_level: bool,

    /// Include the step number field
    #[serde(default = "default_true")]
    pub show_step_numbers: bool,

    /// Character used for separator lines
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Length of separator lines
    #[serde(default = "default_separator_length")]
    pub separator_length: usize,

    /// Prefix shown before step numbers
    #[serde(default = "default_step_prefix")]
    pub robot_step_prefix: String,

    /// Per-category ANSI code overrides (category name -> code)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

fn default_true() -> bool {
    true
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}

fn default_separator() -> char {
    '='
}

fn default_separator_length() -> usize {
    60
}

fn default_step_prefix() -> String {
    "Step".to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            use_colors: true,
            show_timestamp: true,
            timestamp_format: default_timestamp_format(),
            show_test_name: true,
            show_log_level: true,
            show_step_numbers: true,
            separator: default_separator(),
            separator_length: default_separator_length(),
            robot_step_prefix: default_step_prefix(),
            colors: HashMap::new(),
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set color usage
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set timestamp visibility
    pub fn with_timestamp(mut self, show: bool) -> Self {
        self.show_timestamp = show;
        self
    }

    /// Set a per-category color override
    pub fn with_color(mut self, category: impl Into<String>, code: impl Into<String>) -> Self {
        self.colors.insert(category.into(), code.into());
        self
    }
}

/// Robot Framework invocation settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Robot executable to invoke
    #[serde(default = "default_robot_binary")]
    pub robot_binary: String,

    /// Test suite file to run
    #[serde(default = "default_suite")]
    pub suite: String,

    /// Directory for result artifacts
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Detailed log artifact name
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// Report artifact name
    #[serde(default = "default_report_file")]
    pub report_file: String,
}

fn default_robot_binary() -> String {
    "robot".to_string()
}

fn default_suite() -> String {
    "test_suite.robot".to_string()
}

fn default_output_dir() -> String {
    "results".to_string()
}

fn default_log_file() -> String {
    "log.html".to_string()
}

fn default_report_file() -> String {
    "report.html".to_string()
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            robot_binary: default_robot_binary(),
            suite: default_suite(),
            output_dir: default_output_dir(),
            log_file: default_log_file(),
            report_file: default_report_file(),
        }
    }
}

impl RunnerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suite(mut self, suite: impl Into<String>) -> Self {
        self.suite = suite.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
