//! Log line formatters
//!
//! Provides the shared field-composition rules and the console and file
//! output variants.

#![allow(dead_code)]

use chrono::Local;
use std::fmt::Write;

use crate::config::LoggerConfig;
use crate::models::result_icon;
use crate::output::theme::{Category, ColorTheme};

/// Output variant options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatterKind {
    Console,
    File,
}

impl FormatterKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "console" | "terminal" => Some(FormatterKind::Console),
            "file" | "plain" => Some(FormatterKind::File),
            _ => None,
        }
    }

    /// Build the formatter for this variant
    pub fn build(self, config: LoggerConfig) -> Box<dyn LogFormatter> {
        match self {
            FormatterKind::Console => Box::new(ConsoleFormatter::new(config)),
            FormatterKind::File => Box::new(FileFormatter::new(config)),
        }
    }
}

/// Optional per-message fields
///
/// Each field is independently absent; absent fields are elided from the
/// composed line rather than rendered as empty placeholders.
#[derive(Clone, Debug, Default)]
pub struct MessageContext {
    pub test_name: Option<String>,
    pub step_number: Option<u32>,
    pub step_name: Option<String>,
}

impl MessageContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_test_name(mut self, name: impl Into<String>) -> Self {
        self.test_name = Some(name.into());
        self
    }

    pub fn with_step(mut self, number: u32, name: impl Into<String>) -> Self {
        self.step_number = Some(number);
        self.step_name = Some(name.into());
        self
    }
}

/// Formatting capability shared by the console and file variants
///
/// Field primitives are default methods driven by the config flags; each
/// returns an empty string when its field is disabled or absent, and
/// decoration flows through the variant's theme (the file variant holds
/// a disabled theme, so shared code never emits escape codes there).
/// None of these methods fail; absent inputs degrade to omission.
pub trait LogFormatter {
    fn config(&self) -> &LoggerConfig;
    fn theme(&self) -> &ColorTheme;

    /// Render the current time per the configured pattern
    fn format_timestamp(&self) -> String {
        if !self.config().show_timestamp {
            return String::new();
        }

        let now = Local::now();
        let mut timestamp = String::new();
        if write!(timestamp, "{}", now.format(&self.config().timestamp_format)).is_err() {
            // Invalid pattern: fall back instead of failing the line.
            timestamp = now.format("%H:%M:%S").to_string();
        }
        self.theme().paint(&timestamp, Category::Timestamp)
    }

    /// Render the current test name
    fn format_test_name(&self, test_name: Option<&str>) -> String {
        if !self.config().show_test_name {
            return String::new();
        }

        match test_name {
            Some(name) if !name.is_empty() => self.theme().paint(name, Category::TestName),
            _ => String::new(),
        }
    }

    /// Render the bracketed level, padded to width 8
    fn format_log_level(&self, level: &str) -> String {
        if !self.config().show_log_level {
            return String::new();
        }

        let upper = level.to_uppercase();
        let formatted = format!("[{upper:<8}]");
        let code = self.theme().code_for(&upper).to_string();
        self.theme().paint_code(&formatted, &code)
    }

    /// Render step number and step name, joined when both present
    fn format_step(&self, step_number: Option<u32>, step_name: Option<&str>) -> String {
        if !self.config().show_step_numbers {
            return String::new();
        }

        let mut parts = Vec::new();
        if let Some(number) = step_number {
            parts.push(format!("{} {}", self.config().robot_step_prefix, number));
        }
        if let Some(name) = step_name {
            if !name.is_empty() {
                parts.push(name.to_string());
            }
        }

        if parts.is_empty() {
            return String::new();
        }

        self.theme().paint(&parts.join(" | "), Category::Step)
    }

    /// Render the main message body
    fn format_message_content(&self, message: &str) -> String {
        self.theme().paint(message, Category::Message)
    }

    /// Create a separator line, defaulting char and length from config
    fn create_separator(&self, ch: Option<char>, length: Option<usize>) -> String {
        let ch = ch.unwrap_or(self.config().separator);
        let length = length.unwrap_or(self.config().separator_length);

        let separator: String = std::iter::repeat(ch).take(length).collect();
        self.theme().paint(&separator, Category::Separator)
    }

    /// Compose a full log line: timestamp, level, test name, step, message
    ///
    /// Fields whose renderer returned an empty string are elided, so the
    /// joined line never carries empty placeholders or stray separators.
    fn format_message(&self, level: &str, message: &str, context: &MessageContext) -> String {
        let mut parts = Vec::new();

        let fields = [
            self.format_timestamp(),
            self.format_log_level(level),
            self.format_test_name(context.test_name.as_deref()),
            self.format_step(context.step_number, context.step_name.as_deref()),
        ];
        for field in fields {
            if !field.is_empty() {
                parts.push(field);
            }
        }

        if !message.is_empty() {
            parts.push(self.format_message_content(message));
        }

        parts.join(" | ")
    }

    /// Render the block marking a test start
    fn format_test_start(&self, test_name: &str) -> String;

    /// Render the block marking a test end with its result
    fn format_test_end(&self, test_name: &str, result: &str) -> String;

    /// Render an assertion line
    fn format_assertion(
        &self,
        assertion_type: Option<&str>,
        expected: Option<&str>,
        actual: Option<&str>,
    ) -> String;

    /// Render an error line
    fn format_error(&self, error_type: Option<&str>, error_message: Option<&str>) -> String;
}

/// Formatter for console output with colors and icons
pub struct ConsoleFormatter {
    config: LoggerConfig,
    theme: ColorTheme,
}

impl ConsoleFormatter {
    pub fn new(config: LoggerConfig) -> Self {
        let theme = ColorTheme::new(config.use_colors).with_overrides(&config.colors);
        Self { config, theme }
    }
}

impl LogFormatter for ConsoleFormatter {
    fn config(&self) -> &LoggerConfig {
        &self.config
    }

    fn theme(&self) -> &ColorTheme {
        &self.theme
    }

    fn format_test_start(&self, test_name: &str) -> String {
        let separator = self.create_separator(None, None);
        let header = self
            .theme
            .paint(&format!("🚀 Starting Test: {test_name}"), Category::Header);

        format!("\n{separator}\n{header}\n{separator}")
    }

    fn format_test_end(&self, test_name: &str, result: &str) -> String {
        let separator = self.create_separator(None, None);
        let icon = result_icon(result);
        let header = format!("{icon} Test {result}: {test_name}");

        let code = self.theme.code_for(&result.to_uppercase()).to_string();
        let header = self.theme.paint_code(&header, &code);

        format!("\n{separator}\n{header}\n{separator}\n")
    }

    fn format_assertion(
        &self,
        assertion_type: Option<&str>,
        expected: Option<&str>,
        actual: Option<&str>,
    ) -> String {
        let mut parts = vec!["🔍 Assertion:".to_string()];

        if let Some(kind) = assertion_type {
            parts.push(format!("Type: {kind}"));
        }
        if let Some(expected) = expected {
            parts.push(format!("Expected: {expected}"));
        }
        if let Some(actual) = actual {
            parts.push(format!("Actual: {actual}"));
        }

        self.theme.paint(&parts.join(" | "), Category::Assertion)
    }

    fn format_error(&self, error_type: Option<&str>, error_message: Option<&str>) -> String {
        let mut parts = vec!["❌ Error:".to_string()];

        if let Some(kind) = error_type {
            parts.push(format!("Type: {kind}"));
        }
        if let Some(message) = error_message {
            if !message.is_empty() {
                parts.push(message.to_string());
            }
        }

        self.theme.paint(&parts.join(" | "), Category::Error)
    }
}

/// Formatter for file output without decoration
///
/// Holds a permanently disabled theme, so no configuration can make
/// escape codes reach file-rendered text.
pub struct FileFormatter {
    config: LoggerConfig,
    theme: ColorTheme,
}

impl FileFormatter {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            theme: ColorTheme::disabled(),
        }
    }
}

impl LogFormatter for FileFormatter {
    fn config(&self) -> &LoggerConfig {
        &self.config
    }

    fn theme(&self) -> &ColorTheme {
        &self.theme
    }

    fn format_test_start(&self, test_name: &str) -> String {
        let separator = "=".repeat(self.config.separator_length);
        format!("\n{separator}\nStarting Test: {test_name}\n{separator}")
    }

    fn format_test_end(&self, test_name: &str, result: &str) -> String {
        let separator = "=".repeat(self.config.separator_length);
        format!("\n{separator}\nTest {result}: {test_name}\n{separator}\n")
    }

    fn format_assertion(
        &self,
        assertion_type: Option<&str>,
        expected: Option<&str>,
        actual: Option<&str>,
    ) -> String {
        let mut parts = vec!["Assertion:".to_string()];

        if let Some(kind) = assertion_type {
            parts.push(format!("Type: {kind}"));
        }
        if let Some(expected) = expected {
            parts.push(format!("Expected: {expected}"));
        }
        if let Some(actual) = actual {
            parts.push(format!("Actual: {actual}"));
        }

        parts.join(" | ")
    }

    fn format_error(&self, error_type: Option<&str>, error_message: Option<&str>) -> String {
        let mut parts = vec!["Error:".to_string()];

        if let Some(kind) = error_type {
            parts.push(format!("Type: {kind}"));
        }
        if let Some(message) = error_message {
            if !message.is_empty() {
                parts.push(message.to_string());
            }
        }

        parts.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_config() -> LoggerConfig {
        LoggerConfig {
            use_colors: false,
            show_timestamp: false,
            ..LoggerConfig::default()
        }
    }

    #[test]
    fn test_formatter_kind_from_str() {
        assert_eq!(FormatterKind::from_str("console"), Some(FormatterKind::Console));
        assert_eq!(FormatterKind::from_str("FILE"), Some(FormatterKind::File));
        assert_eq!(FormatterKind::from_str("plain"), Some(FormatterKind::File));
        assert_eq!(FormatterKind::from_str("unknown"), None);
    }

    #[test]
    fn test_timestamp_hidden_when_disabled() {
        let formatter = ConsoleFormatter::new(plain_config());
        assert_eq!(formatter.format_timestamp(), "");
    }

    #[test]
    fn test_log_level_padded_and_bracketed() {
        let formatter = ConsoleFormatter::new(plain_config());
        assert_eq!(formatter.format_log_level("info"), "[INFO    ]");
        assert_eq!(formatter.format_log_level("WARNING"), "[WARNING ]");
    }

    #[test]
    fn test_log_level_hidden_when_disabled() {
        let mut config = plain_config();
        config.show_log_level = false;
        let formatter = ConsoleFormatter::new(config);
        assert_eq!(formatter.format_log_level("info"), "");
    }

    #[test]
    fn test_test_name_absent_is_empty() {
        let formatter = ConsoleFormatter::new(plain_config());
        assert_eq!(formatter.format_test_name(None), "");
        assert_eq!(formatter.format_test_name(Some("")), "");
        assert_eq!(formatter.format_test_name(Some("T1")), "T1");
    }

    #[test]
    fn test_step_joins_present_parts() {
        let formatter = ConsoleFormatter::new(plain_config());
        assert_eq!(formatter.format_step(Some(3), Some("check")), "Step 3 | check");
        assert_eq!(formatter.format_step(Some(3), None), "Step 3");
        assert_eq!(formatter.format_step(None, Some("check")), "check");
        assert_eq!(formatter.format_step(None, None), "");
    }

    #[test]
    fn test_create_separator_defaults_from_config() {
        let formatter = ConsoleFormatter::new(plain_config());
        assert_eq!(formatter.create_separator(None, None), "=".repeat(60));
        assert_eq!(formatter.create_separator(Some('-'), Some(5)), "-----");
    }

    #[test]
    fn test_format_message_full_composition() {
        let formatter = ConsoleFormatter::new(plain_config());
        let context = MessageContext::new()
            .with_test_name("T1")
            .with_step(2, "check");

        let line = formatter.format_message("info", "hello", &context);
        assert_eq!(line, "[INFO    ] | T1 | Step 2 | check | hello");
    }

    #[test]
    fn test_format_message_elides_empty_fields() {
        let formatter = ConsoleFormatter::new(plain_config());
        let line = formatter.format_message("info", "hello", &MessageContext::new());
        assert_eq!(line, "[INFO    ] | hello");
        assert!(!line.contains(" |  | "));
        assert!(!line.starts_with(" | "));
        assert!(!line.ends_with(" | "));
    }

    #[test]
    fn test_format_message_all_fields_disabled() {
        let config = LoggerConfig {
            use_colors: false,
            show_timestamp: false,
            show_log_level: false,
            show_test_name: false,
            show_step_numbers: false,
            ..LoggerConfig::default()
        };
        let formatter = ConsoleFormatter::new(config);
        let context = MessageContext::new()
            .with_test_name("T1")
            .with_step(1, "step");

        assert_eq!(formatter.format_message("info", "only", &context), "only");
    }

    #[test]
    fn test_console_colors_applied() {
        let config = LoggerConfig {
            show_timestamp: false,
            ..LoggerConfig::default()
        };
        let formatter = ConsoleFormatter::new(config);

        let level = formatter.format_log_level("pass");
        assert!(level.starts_with("\x1b[32m"));
        assert!(level.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_console_test_start_block() {
        let formatter = ConsoleFormatter::new(plain_config());
        let block = formatter.format_test_start("Login Test");

        assert!(block.starts_with('\n'));
        assert!(block.contains("🚀 Starting Test: Login Test"));
        assert_eq!(block.matches(&"=".repeat(60)).count(), 2);
    }

    #[test]
    fn test_console_test_end_known_result() {
        let formatter = ConsoleFormatter::new(plain_config());
        let block = formatter.format_test_end("Login Test", "PASS");

        assert!(block.contains("✅ Test PASS: Login Test"));
        assert!(block.ends_with('\n'));
    }

    #[test]
    fn test_console_test_end_unknown_result_falls_back() {
        let formatter = ConsoleFormatter::new(plain_config());
        let block = formatter.format_test_end("Login Test", "FLAKY");

        assert!(block.contains("📋 Test FLAKY: Login Test"));
        assert_eq!(block.matches(&"=".repeat(60)).count(), 2);
    }

    #[test]
    fn test_console_assertion_with_icon() {
        let formatter = ConsoleFormatter::new(plain_config());
        let line = formatter.format_assertion(Some("equals"), Some("5"), Some("5"));
        assert_eq!(line, "🔍 Assertion: | Type: equals | Expected: 5 | Actual: 5");
    }

    #[test]
    fn test_file_assertion_exact_composition() {
        let formatter = FileFormatter::new(LoggerConfig::default());
        let line = formatter.format_assertion(Some("equals"), Some("5"), Some("5"));
        assert_eq!(line, "Assertion: | Type: equals | Expected: 5 | Actual: 5");
    }

    #[test]
    fn test_assertion_absent_parts_elided() {
        let formatter = FileFormatter::new(LoggerConfig::default());
        assert_eq!(formatter.format_assertion(None, None, None), "Assertion:");
        assert_eq!(
            formatter.format_assertion(Some("contains"), None, Some("abc")),
            "Assertion: | Type: contains | Actual: abc"
        );
    }

    #[test]
    fn test_error_composition() {
        let console = ConsoleFormatter::new(plain_config());
        assert_eq!(
            console.format_error(Some("Timeout"), Some("gave up after 30s")),
            "❌ Error: | Type: Timeout | gave up after 30s"
        );

        let file = FileFormatter::new(LoggerConfig::default());
        assert_eq!(
            file.format_error(None, Some("boom")),
            "Error: | boom"
        );
    }

    #[test]
    fn test_file_output_never_contains_escapes() {
        // Colors on and overrides set: the file variant must stay clean.
        let config = LoggerConfig {
            use_colors: true,
            ..LoggerConfig::default()
        }
        .with_color("MESSAGE", "\x1b[35m");
        let formatter = FileFormatter::new(config);

        let context = MessageContext::new()
            .with_test_name("T1")
            .with_step(1, "step");
        let outputs = [
            formatter.format_message("pass", "done", &context),
            formatter.format_test_start("T1"),
            formatter.format_test_end("T1", "FAIL"),
            formatter.format_assertion(Some("equals"), Some("1"), Some("2")),
            formatter.format_error(Some("IO"), Some("disk full")),
        ];

        for output in outputs {
            assert!(!output.contains('\x1b'), "escape found in: {output:?}");
        }
    }

    #[test]
    fn test_file_blocks_use_plain_equals() {
        let config = LoggerConfig {
            separator: '-',
            separator_length: 10,
            ..LoggerConfig::default()
        };
        let formatter = FileFormatter::new(config);

        let block = formatter.format_test_start("T1");
        assert!(block.contains(&"=".repeat(10)));
        assert!(!block.contains("----------"));
    }

    #[test]
    fn test_kind_build_selects_variant() {
        let console = FormatterKind::Console.build(plain_config());
        let file = FormatterKind::File.build(LoggerConfig::default());

        assert!(console.format_test_start("T").contains("🚀"));
        assert!(!file.format_test_start("T").contains("🚀"));
    }
}
