//! Color capability detection
//!
//! Decides whether console output should carry ANSI decoration.

use std::env;
use std::io::IsTerminal;

/// Check whether the environment permits colored output
///
/// True when stdout is an interactive terminal, TERM is not "dumb",
/// and NO_COLOR is unset.
pub fn detect_color_support() -> bool {
    std::io::stdout().is_terminal()
        && env_allows_color(
            env::var("TERM").ok().as_deref(),
            env::var("NO_COLOR").ok().as_deref(),
        )
}

/// The environment-variable half of the color decision
fn env_allows_color(term: Option<&str>, no_color: Option<&str>) -> bool {
    term != Some("dumb") && no_color.is_none()
}
