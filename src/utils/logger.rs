//! Logging utilities
//!
//! Provides diagnostic logging configuration. These diagnostics are
//! separate from the rendered test log, which goes through the session.

#![allow(dead_code)]

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Diagnostic verbosity configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogVerbosity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogVerbosity {
    pub fn to_tracing_level(self) -> Level {
        match self {
            LogVerbosity::Trace => Level::TRACE,
            LogVerbosity::Debug => Level::DEBUG,
            LogVerbosity::Info => Level::INFO,
            LogVerbosity::Warn => Level::WARN,
            LogVerbosity::Error => Level::ERROR,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(LogVerbosity::Trace),
            "debug" => Some(LogVerbosity::Debug),
            "info" => Some(LogVerbosity::Info),
            "warn" | "warning" => Some(LogVerbosity::Warn),
            "error" => Some(LogVerbosity::Error),
            _ => None,
        }
    }
}

/// Initialize diagnostics with the specified verbosity
pub fn init_logger(verbosity: LogVerbosity) {
    let filter = EnvFilter::new(format!("robot_log={}", verbosity.to_tracing_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
