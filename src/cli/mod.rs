//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Structured console and file logging for Robot Framework test runs
#[derive(Parser, Debug)]
#[command(name = "robot-log")]
#[command(author = "hephaex@gmail.com")]
#[command(version = "0.1.0")]
#[command(about = "Run Robot Framework suites with structured progress logging")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a Robot Framework test suite
    Run(RunArgs),

    /// Render a sample logging session
    Demo(DemoArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Test suite file to run
    #[arg(short, long)]
    pub suite: Option<String>,

    /// Directory for result artifacts
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Configuration file to use
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Arguments for demo command
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Output variant (console, file)
    #[arg(short, long, default_value = "console")]
    pub format: String,

    /// Log file path (file variant only)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Configuration file to use
    #[arg(short, long)]
    pub config: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create a configuration file with example settings
    Init {
        /// Output path
        #[arg(short, long, default_value = "./robot-log.yaml")]
        output: String,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective configuration
    Show {
        /// Output format (yaml, json)
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },

    /// Validate a configuration file
    Validate {
        /// File to validate (defaults to the discovered one)
        file: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["robot-log", "demo", "--format", "file"]);
        match args.command {
            Command::Demo(demo_args) => {
                assert_eq!(demo_args.format, "file");
            }
            _ => panic!("Expected Demo command"),
        }
    }

    #[test]
    fn test_run_args() {
        let args = Args::parse_from([
            "robot-log",
            "run",
            "--suite",
            "smoke.robot",
            "--output-dir",
            "out",
        ]);
        match args.command {
            Command::Run(run_args) => {
                assert_eq!(run_args.suite.as_deref(), Some("smoke.robot"));
                assert_eq!(run_args.output_dir.as_deref(), Some("out"));
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_config_init_defaults() {
        let args = Args::parse_from(["robot-log", "config", "init"]);
        match args.command {
            Command::Config(config_args) => match config_args.action {
                ConfigAction::Init { output, force } => {
                    assert_eq!(output, "./robot-log.yaml");
                    assert!(!force);
                }
                _ => panic!("Expected Init action"),
            },
            _ => panic!("Expected Config command"),
        }
    }
}
