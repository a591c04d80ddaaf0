//! robot-log - Structured logging for Robot Framework test runs
//!
//! A CLI tool that runs Robot Framework suites and renders structured,
//! configuration-driven progress lines: color-decorated on an interactive
//! console, plain text in a log file.
//!
//! ## Features
//!
//! - Configurable field composition (timestamp, level, test name, steps)
//! - Console and file output variants sharing one rule set
//! - Test start/end blocks, assertion and error lines
//! - Robot Framework invocation with 1:1 exit-code forwarding
//!
//! ## Usage
//!
//! ```bash
//! # Run a suite with the default configuration
//! robot-log run --suite test_suite.robot
//!
//! # Render a sample session to the console
//! robot-log demo
//!
//! # Render the same session into a plain log file
//! robot-log demo --format file --output results/run.log
//!
//! # Create a starter configuration file
//! robot-log config init
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod models;
mod output;
mod runner;
mod session;
mod utils;

use cli::Args;
use config::{ConfigFile, EnvConfig, LoggerConfig};
use output::{detect_color_support, FormatterKind};
use runner::RobotRunner;
use session::TestSession;
use utils::{init_logger, LogVerbosity};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let verbosity = if args.verbose {
        LogVerbosity::Debug
    } else {
        LogVerbosity::Info
    };
    init_logger(verbosity);

    match args.command {
        cli::Command::Run(run_args) => {
            run_suite(run_args).await?;
        }
        cli::Command::Demo(demo_args) => {
            run_demo(demo_args)?;
        }
        cli::Command::Config(config_args) => {
            manage_config(config_args)?;
        }
    }

    Ok(())
}

/// Load the config file named on the command line, in the environment,
/// or discovered in a standard location
fn load_config(explicit: Option<&str>) -> Result<ConfigFile> {
    let env = EnvConfig::load();

    if let Some(path) = explicit.or(env.config_file.as_deref()) {
        ConfigFile::load(path)
    } else {
        ConfigFile::load_default()
    }
}

/// Resolve the color decision: config, then CLI/env opt-outs, then probe
fn resolve_colors(config: &LoggerConfig, no_color_flag: bool) -> bool {
    let env = EnvConfig::load();
    config.use_colors
        && !no_color_flag
        && env.no_color != Some(true)
        && detect_color_support()
}

async fn run_suite(args: cli::RunArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let env = EnvConfig::load();

    let mut runner_config = config.runner.clone();
    if let Some(suite) = args.suite.or(env.suite) {
        runner_config.suite = suite;
    }
    if let Some(output_dir) = args.output_dir.or(env.output_dir) {
        runner_config.output_dir = output_dir;
    }

    let runner = RobotRunner::new(runner_config);

    println!("🚀 Running Robot Framework tests with custom logger...");
    println!("{}", "=".repeat(60));

    match runner.run().await {
        Ok(outcome) => {
            if outcome.success {
                println!("\n✅ All tests passed!");
            } else {
                println!("\n❌ Some tests failed!");
            }

            println!("\n📊 Results saved in '{}' directory", runner.output_dir());
            println!("📄 Open '{}' to view detailed logs", runner.log_path().display());
            println!("📈 Open '{}' to view test report", runner.report_path().display());

            if !outcome.success {
                std::process::exit(outcome.exit_code);
            }
        }
        Err(e) => {
            println!("❌ {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn run_demo(args: cli::DemoArgs) -> Result<()> {
    let config_file = load_config(args.config.as_deref())?;

    let kind = FormatterKind::from_str(&args.format)
        .ok_or_else(|| anyhow::anyhow!("Unknown output variant: {}", args.format))?;

    let mut logger_config = config_file.logger.clone();
    logger_config.use_colors = resolve_colors(&logger_config, args.no_color);

    let mut session = match kind {
        FormatterKind::Console => TestSession::to_stdout(logger_config),
        FormatterKind::File => {
            let path = args
                .output
                .unwrap_or_else(|| "results/robot-log.log".to_string());
            let session = TestSession::to_file(logger_config, &path)?;
            println!("Writing demo log to '{path}'");
            session
        }
    };

    session.info("Robot Logger ready!")?;
    session.pass("Basic functionality works")?;

    session.start_test("Login Test")?;
    session.step("Navigate to login page")?;
    session.step("Enter username")?;
    session.step("Enter password")?;
    session.assertion(Some("equals"), Some("Welcome"), Some("Welcome"))?;
    session.pass("Login successful")?;
    session.end_test("PASS")?;

    session.start_test("Checkout Test")?;
    session.step("Add item to cart")?;
    session.warning("Cart service responded slowly")?;
    session.fail("Total mismatch")?;
    session.report_error(Some("AssertionError"), Some("expected 2 items, found 1"))?;
    session.error("Checkout aborted")?;
    session.end_test("FAIL")?;

    Ok(())
}

fn manage_config(args: cli::ConfigArgs) -> Result<()> {
    use std::path::Path;

    match args.action {
        cli::ConfigAction::Init { output, force } => {
            let path = Path::new(&output);
            if path.exists() && !force {
                anyhow::bail!(
                    "Configuration file already exists: {output}. Use --force to overwrite."
                );
            }

            let config = ConfigFile::example();
            config.save(path)?;
            println!("✓ Configuration file created: {output}");
            println!("\nEdit the file to customize your settings.");
        }

        cli::ConfigAction::Show { format } => {
            let config = ConfigFile::load_default()?;
            let output = if format == "json" {
                serde_json::to_string_pretty(&config)?
            } else {
                serde_yaml::to_string(&config)?
            };
            println!("{output}");
        }

        cli::ConfigAction::Validate { file } => {
            let path = file.or_else(|| {
                ConfigFile::find().map(|p| p.to_string_lossy().to_string())
            });

            let Some(path) = path else {
                println!("No configuration file found. Create one with: robot-log config init");
                return Ok(());
            };

            match ConfigFile::load(&path) {
                Ok(_) => {
                    println!("✓ Configuration file is valid: {path}");
                }
                Err(e) => {
                    println!("✗ Configuration file is invalid: {path}");
                    println!("  Error: {e}");
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
