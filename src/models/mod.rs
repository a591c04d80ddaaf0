//! Log level and test outcome models
//!
//! Defines the levels a session can emit and the outcomes a test can end with.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Log level of an emitted line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Pass,
    Fail,
    Error,
    Warning,
}

impl LogLevel {
    /// Get level name in uppercase
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Pass => "PASS",
            LogLevel::Fail => "FAIL",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "INFO" => Some(LogLevel::Info),
            "PASS" => Some(LogLevel::Pass),
            "FAIL" => Some(LogLevel::Fail),
            "ERROR" => Some(LogLevel::Error),
            "WARNING" | "WARN" => Some(LogLevel::Warning),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome a test can end with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestOutcome {
    Pass,
    Fail,
    Error,
    Skip,
    Warning,
}

/// Icon shown for outcomes not in the known set
pub const FALLBACK_ICON: &str = "📋";

impl TestOutcome {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PASS" => Some(TestOutcome::Pass),
            "FAIL" => Some(TestOutcome::Fail),
            "ERROR" => Some(TestOutcome::Error),
            "SKIP" => Some(TestOutcome::Skip),
            "WARNING" => Some(TestOutcome::Warning),
            _ => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TestOutcome::Pass => "✅",
            TestOutcome::Fail => "❌",
            TestOutcome::Error => "💥",
            TestOutcome::Skip => "⏭️",
            TestOutcome::Warning => "⚠️",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TestOutcome::Pass)
    }
}

/// Icon for a result value, falling back for unrecognized names
pub fn result_icon(result: &str) -> &'static str {
    TestOutcome::from_str(result)
        .map(|o| o.icon())
        .unwrap_or(FALLBACK_ICON)
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestOutcome::Pass => write!(f, "PASS"),
            TestOutcome::Fail => write!(f, "FAIL"),
            TestOutcome::Error => write!(f, "ERROR"),
            TestOutcome::Skip => write!(f, "SKIP"),
            TestOutcome::Warning => write!(f, "WARNING"),
        }
    }
}
