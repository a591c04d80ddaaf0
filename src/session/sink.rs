//! Output sinks for composed log lines
//!
//! A sink receives exactly one newline-terminated string per emission.

#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Line-oriented writable destination
pub trait LogSink {
    /// Write one composed line; the newline is appended here
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Sink writing to standard output
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for StdoutSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{line}").context("Failed to write to stdout")?;
        Ok(())
    }
}

/// Sink appending to a log file
pub struct FileSink {
    file: File,
}

impl FileSink {
    /// Open (or create) the log file for appending
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        Ok(Self { file })
    }
}

impl LogSink for FileSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.file, "{line}").context("Failed to write to log file")?;
        Ok(())
    }
}

/// In-memory sink capturing lines for inspection
///
/// Clones share the same buffer, so a handle kept outside a session can
/// observe what the session emitted.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut lines = self
            .lines
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory sink buffer poisoned"))?;
        lines.push(line.to_string());
        Ok(())
    }
}
