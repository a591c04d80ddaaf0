//! Test session facade
//!
//! Tracks one test's logging lifetime and drives the formatter.

#![allow(dead_code)]

mod sink;

pub use sink::{FileSink, LogSink, MemorySink, StdoutSink};

use anyhow::Result;
use std::path::Path;

use crate::config::LoggerConfig;
use crate::models::LogLevel;
use crate::output::{FormatterKind, LogFormatter, MessageContext};

/// Logging session for one test at a time
///
/// Holds the transient state (current test name, step counter) and
/// forwards each composed line to the sink. One instance serves one
/// logical caller; concurrent tests each own their own session.
pub struct TestSession {
    formatter: Box<dyn LogFormatter>,
    sink: Box<dyn LogSink>,
    current_test: Option<String>,
    step_counter: u32,
}

impl TestSession {
    /// Create a session over an explicit formatter and sink
    pub fn new(formatter: Box<dyn LogFormatter>, sink: Box<dyn LogSink>) -> Self {
        Self {
            formatter,
            sink,
            current_test: None,
            step_counter: 0,
        }
    }

    /// Console-formatted session writing to stdout
    pub fn to_stdout(config: LoggerConfig) -> Self {
        Self::new(
            FormatterKind::Console.build(config),
            Box::new(StdoutSink::new()),
        )
    }

    /// File-formatted session appending to a log file
    pub fn to_file(config: LoggerConfig, path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(
            FormatterKind::File.build(config),
            Box::new(FileSink::open(path)?),
        ))
    }

    /// Name of the test currently in progress
    pub fn current_test(&self) -> Option<&str> {
        self.current_test.as_deref()
    }

    /// Steps logged since the current test started
    pub fn step_count(&self) -> u32 {
        self.step_counter
    }

    /// Begin a test: set its name, reset the step counter, emit the start block
    pub fn start_test(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        self.current_test = Some(name.clone());
        self.step_counter = 0;

        let block = self.formatter.format_test_start(&name);
        self.sink.write_line(&block)
    }

    /// End the current test: emit the end block, then clear session state
    pub fn end_test(&mut self, result: &str) -> Result<()> {
        let name = self.current_test.clone().unwrap_or_default();
        let block = self.formatter.format_test_end(&name, result);
        self.sink.write_line(&block)?;

        self.current_test = None;
        self.step_counter = 0;
        Ok(())
    }

    /// Log a numbered test step
    pub fn step(&mut self, message: &str) -> Result<()> {
        self.step_counter += 1;

        let mut context = self.context();
        context.step_number = Some(self.step_counter);
        context.step_name = Some(message.to_string());

        let line = self
            .formatter
            .format_message(LogLevel::Info.as_str(), message, &context);
        self.sink.write_line(&line)
    }

    /// Log an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    /// Log a passing check
    pub fn pass(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Pass, message)
    }

    /// Log a failing check
    pub fn fail(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Fail, message)
    }

    /// Log an error
    pub fn error(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Error, message)
    }

    /// Log a warning
    pub fn warning(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Warning, message)
    }

    /// Log an assertion with expected and actual values
    pub fn assertion(
        &mut self,
        assertion_type: Option<&str>,
        expected: Option<&str>,
        actual: Option<&str>,
    ) -> Result<()> {
        let line = self
            .formatter
            .format_assertion(assertion_type, expected, actual);
        self.sink.write_line(&line)
    }

    /// Log a structured error report
    pub fn report_error(&mut self, error_type: Option<&str>, message: Option<&str>) -> Result<()> {
        let line = self.formatter.format_error(error_type, message);
        self.sink.write_line(&line)
    }

    fn log(&mut self, level: LogLevel, message: &str) -> Result<()> {
        let context = self.context();
        let line = self
            .formatter
            .format_message(level.as_str(), message, &context);
        self.sink.write_line(&line)
    }

    fn context(&self) -> MessageContext {
        let mut context = MessageContext::new();
        context.test_name = self.current_test.clone();
        context
    }
}
