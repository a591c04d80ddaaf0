//! Robot Framework invocation
//!
//! Shells out to the robot executable and maps its exit code.

#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::RunnerConfig;
use crate::utils::Timer;

/// Runner errors
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Robot Framework not found (tried '{0}'). Install it with: pip install robotframework")]
    RobotNotFound(String),

    #[error("Failed to launch '{binary}': {source}")]
    Launch {
        binary: String,
        source: std::io::Error,
    },
}

/// Result of one suite invocation
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// Whether every test passed
    pub success: bool,
    /// Exit code of the robot process, forwarded 1:1
    pub exit_code: i32,
    /// Duration of the run in milliseconds
    pub duration_ms: u64,
}

/// Invokes the robot executable for one suite
pub struct RobotRunner {
    config: RunnerConfig,
}

impl RobotRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Directory the run writes its artifacts into
    pub fn output_dir(&self) -> &str {
        &self.config.output_dir
    }

    /// Path of the detailed log artifact the run produces
    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(&self.config.output_dir).join(&self.config.log_file)
    }

    /// Path of the report artifact the run produces
    pub fn report_path(&self) -> PathBuf {
        PathBuf::from(&self.config.output_dir).join(&self.config.report_file)
    }

    /// Argument list passed to the robot executable
    pub fn args(&self) -> Vec<String> {
        vec![
            "--outputdir".to_string(),
            self.config.output_dir.clone(),
            "--log".to_string(),
            self.config.log_file.clone(),
            "--report".to_string(),
            self.config.report_file.clone(),
            self.config.suite.clone(),
        ]
    }

    /// Check that the robot executable is available
    pub async fn is_installed(&self) -> bool {
        Command::new(&self.config.robot_binary)
            .arg("--version")
            .output()
            .await
            // Robot exits 251 for --version, so only a spawn failure counts.
            .is_ok()
    }

    /// Run the suite, streaming robot's own output through
    pub async fn run(&self) -> Result<RunOutcome, RunnerError> {
        if !self.is_installed().await {
            return Err(RunnerError::RobotNotFound(self.config.robot_binary.clone()));
        }

        let args = self.args();
        debug!("Invoking {} {}", self.config.robot_binary, args.join(" "));
        info!("Running suite {}", self.config.suite);

        let timer = Timer::start("robot run");
        let status = Command::new(&self.config.robot_binary)
            .args(&args)
            .status()
            .await
            .map_err(|source| RunnerError::Launch {
                binary: self.config.robot_binary.clone(),
                source,
            })?;
        let duration_ms = timer.stop().as_millis() as u64;

        let exit_code = status.code().unwrap_or(-1);
        info!("Suite finished with exit code {exit_code} in {duration_ms}ms");

        Ok(RunOutcome {
            success: status.success(),
            exit_code,
            duration_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_match_fixed_invocation() {
        let runner = RobotRunner::new(RunnerConfig::default());
        assert_eq!(
            runner.args(),
            vec![
                "--outputdir",
                "results",
                "--log",
                "log.html",
                "--report",
                "report.html",
                "test_suite.robot",
            ]
        );
    }

    #[test]
    fn test_artifact_paths() {
        let config = RunnerConfig::new().with_output_dir("out");
        let runner = RobotRunner::new(config);

        assert_eq!(runner.log_path(), PathBuf::from("out/log.html"));
        assert_eq!(runner.report_path(), PathBuf::from("out/report.html"));
    }

    #[tokio::test]
    async fn test_missing_binary_reports_not_found() {
        let config = RunnerConfig {
            robot_binary: "robot-binary-that-does-not-exist".to_string(),
            ..RunnerConfig::default()
        };
        let runner = RobotRunner::new(config);

        assert!(!runner.is_installed().await);
        match runner.run().await {
            Err(RunnerError::RobotNotFound(binary)) => {
                assert_eq!(binary, "robot-binary-that-does-not-exist");
            }
            other => panic!("Expected RobotNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_maps_exit_code() {
        // Use a shell stand-in for robot so the test controls the exit code.
        let config = RunnerConfig {
            robot_binary: "false".to_string(),
            ..RunnerConfig::default()
        };
        let runner = RobotRunner::new(config);

        let outcome = runner.run().await.unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.exit_code, 1);
    }
}
