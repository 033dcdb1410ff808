//! Command execution abstraction for testability.
//!
//! This module provides a trait-based abstraction over command execution,
//! allowing unit tests to drive the platform-interface probe with canned
//! utility output instead of running `ipconfig`/`ifconfig` for real.

use anyhow::Result;
use std::process::{Command, Stdio};

#[cfg(test)]
use mockall::automock;

/// Output from command execution
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Standard output from the command
    pub stdout: String,
    /// Whether the command succeeded (exit code 0)
    pub success: bool,
}

/// Trait for command execution, allowing dependency injection for testing.
///
/// The real implementation shells out via `std::process::Command`; tests
/// use a mock to control command behavior without touching the OS.
#[cfg_attr(test, automock)]
pub trait CommandRunner: Send + Sync {
    /// Run a command with the given arguments and capture its stdout.
    fn run(&self, cmd: &str, args: &[String]) -> Result<CommandOutput>;
}

/// Real implementation of CommandRunner that runs actual system commands.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new SystemRunner
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, cmd: &str, args: &[String]) -> Result<CommandOutput> {
        let output = Command::new(cmd)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            success: output.status.success(),
        })
    }
}
