//! Output formatting module
//!
//! Field composition rules, color theme, and capability detection.

mod detection;
mod formatter;
mod theme;

pub use detection::detect_color_support;
pub use formatter::{ConsoleFormatter, FileFormatter, FormatterKind, LogFormatter, MessageContext};
pub use theme::{Category, ColorTheme, RESET};
