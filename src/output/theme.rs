//! Color theme for log decoration
//!
//! Maps semantic categories to ANSI escape codes.

#![allow(dead_code)]

use std::collections::HashMap;

/// ANSI reset code
pub const RESET: &str = "\x1b[0m";

/// Semantic category of a log field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Info,
    Pass,
    Fail,
    Error,
    Warning,
    Header,
    Timestamp,
    TestName,
    Step,
    Message,
    Separator,
    Assertion,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Info => "INFO",
            Category::Pass => "PASS",
            Category::Fail => "FAIL",
            Category::Error => "ERROR",
            Category::Warning => "WARNING",
            Category::Header => "HEADER",
            Category::Timestamp => "TIMESTAMP",
            Category::TestName => "TEST_NAME",
            Category::Step => "STEP",
            Category::Message => "MESSAGE",
            Category::Separator => "SEPARATOR",
            Category::Assertion => "ASSERTION",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "INFO" => Some(Category::Info),
            "PASS" => Some(Category::Pass),
            "FAIL" => Some(Category::Fail),
            "ERROR" => Some(Category::Error),
            "WARNING" => Some(Category::Warning),
            "HEADER" => Some(Category::Header),
            "TIMESTAMP" => Some(Category::Timestamp),
            "TEST_NAME" => Some(Category::TestName),
            "STEP" => Some(Category::Step),
            "MESSAGE" => Some(Category::Message),
            "SEPARATOR" => Some(Category::Separator),
            "ASSERTION" => Some(Category::Assertion),
            _ => None,
        }
    }
}

/// Color theme mapping categories to ANSI codes
///
/// A lookup for a category with no registered code yields no decoration.
/// When the theme is disabled every paint call is the identity.
#[derive(Clone, Debug)]
pub struct ColorTheme {
    colors: HashMap<String, String>,
    enabled: bool,
}

impl ColorTheme {
    /// Create a theme with the default code set
    pub fn new(enabled: bool) -> Self {
        let mut colors = HashMap::new();
        colors.insert("INFO".to_string(), "\x1b[34m".to_string());
        colors.insert("PASS".to_string(), "\x1b[32m".to_string());
        colors.insert("FAIL".to_string(), "\x1b[31m".to_string());
        colors.insert("ERROR".to_string(), "\x1b[31m\x1b[1m".to_string());
        colors.insert("WARNING".to_string(), "\x1b[33m".to_string());
        colors.insert("HEADER".to_string(), "\x1b[36m\x1b[1m".to_string());
        colors.insert("TIMESTAMP".to_string(), "\x1b[36m".to_string());
        colors.insert("TEST_NAME".to_string(), "\x1b[35m".to_string());
        colors.insert("STEP".to_string(), "\x1b[34m".to_string());
        colors.insert("SEPARATOR".to_string(), "\x1b[36m".to_string());
        colors.insert("ASSERTION".to_string(), "\x1b[36m".to_string());

        Self { colors, enabled }
    }

    /// Create a theme with all decoration disabled
    pub fn disabled() -> Self {
        Self {
            colors: HashMap::new(),
            enabled: false,
        }
    }

    /// Apply per-category overrides on top of the defaults
    pub fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Self {
        for (category, code) in overrides {
            self.colors.insert(category.to_uppercase(), code.clone());
        }
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get the code registered for a category, empty if none
    pub fn code(&self, category: Category) -> &str {
        self.code_for(category.as_str())
    }

    /// Get the code registered under a category name, empty if none
    pub fn code_for(&self, name: &str) -> &str {
        self.colors.get(name).map(String::as_str).unwrap_or("")
    }

    /// Wrap text in a category's decoration
    pub fn paint(&self, text: &str, category: Category) -> String {
        self.paint_code(text, self.code(category))
    }

    /// Wrap text in a raw decoration code
    ///
    /// Identity when the theme is disabled or the code is empty.
    pub fn paint_code(&self, text: &str, code: &str) -> String {
        if !self.enabled || code.is_empty() {
            return text.to_string();
        }
        format!("{code}{text}{RESET}")
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::new(true)
    }
}
