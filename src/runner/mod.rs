// autopush: stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command execution with captured output.
//!
//! ```text
//! CommandRunner::run(command, description)
//!   "Running: ..."
//!        |
//!        v
//!   CommandExecutor::execute
//!   ProcessExecutor (git via ProcessBuilder) | fakes in tests
//!        |
//!        v
//!   CommandResult { stdout, stderr, failure }
//!   stdout on success, "Error: <stderr>" on a non-zero exit,
//!   "Exception: <error>" when git could not be run at all
//! ```
//!
//! Launch failures never escape as errors: they come back as a failed
//! [`CommandResult`] carrying the error text.

use std::future::Future;
use std::path::PathBuf;
use tracing::debug;

use crate::console::Reporter;
use crate::core::process::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::error::ProcessError;
use crate::git::GitCommand;

/// Outcome of a single command invocation.
#[derive(Debug)]
pub struct CommandResult {
    stdout: String,
    stderr: String,
    failure: Option<ProcessError>,
}

impl CommandResult {
    /// A successful run that printed `stdout`.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            failure: None,
        }
    }

    /// A completed run; anything other than exit code 0 is a failure.
    pub fn exited(
        command: &GitCommand,
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        let failure = (exit_code != Some(0)).then(|| ProcessError::NonZeroExit {
            command: command.to_string(),
            code: exit_code,
        });
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            failure,
        }
    }

    /// A run that could not be started or whose output could not be collected.
    #[must_use]
    pub fn launch_failure(error: ProcessError) -> Self {
        Self {
            stdout: String::new(),
            stderr: error.to_string(),
            failure: Some(error),
        }
    }

    fn from_output(command: &GitCommand, output: ProcessOutput) -> Self {
        Self::exited(command, output.exit_code, output.stdout, output.stderr)
    }

    /// Whether the command exited with code 0.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.failure.is_none()
    }

    /// Captured standard output.
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Captured standard error.
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Why the command failed, if it did.
    #[must_use]
    pub const fn failure(&self) -> Option<&ProcessError> {
        self.failure.as_ref()
    }

    /// Text describing the failure: captured stderr, or the failure itself
    /// when the command wrote nothing to stderr.
    #[must_use]
    pub fn error_text(&self) -> String {
        let stderr = self.stderr.trim_end();
        match &self.failure {
            Some(failure) if stderr.is_empty() => failure.to_string(),
            _ => stderr.to_string(),
        }
    }
}

/// Capability to run a git command and capture its result.
pub trait CommandExecutor {
    /// Runs `command` to completion.
    fn execute(&self, command: &GitCommand) -> impl Future<Output = CommandResult>;
}

/// Runs git as a child process.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    program: String,
    cwd: Option<PathBuf>,
}

impl ProcessExecutor {
    /// Executor for the given git program (name on PATH or a path).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            cwd: None,
        }
    }

    /// Runs every command inside `dir` instead of the current directory.
    #[must_use]
    pub fn with_cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new("git")
    }
}

impl CommandExecutor for ProcessExecutor {
    async fn execute(&self, command: &GitCommand) -> CommandResult {
        let builder = match ProcessBuilder::which(&self.program) {
            Ok(builder) => builder,
            Err(e) => return CommandResult::launch_failure(e),
        };

        let mut builder = builder
            .args(command.args())
            .flag(ProcessFlags::ALLOW_FAILURE);
        if let Some(cwd) = &self.cwd {
            builder = builder.cwd(cwd);
        }

        match builder.run().await {
            Ok(output) => CommandResult::from_output(command, output),
            Err(e) => CommandResult::launch_failure(e),
        }
    }
}

/// Runs commands and narrates them on the console.
#[derive(Debug)]
pub struct CommandRunner<E> {
    executor: E,
}

impl<E: CommandExecutor> CommandRunner<E> {
    pub const fn new(executor: E) -> Self {
        Self { executor }
    }

    /// The underlying executor.
    pub const fn executor(&self) -> &E {
        &self.executor
    }

    /// Runs `command`, announcing it with `description` (or the command line
    /// when no description is given).
    pub async fn run(
        &self,
        command: &GitCommand,
        description: Option<&str>,
        reporter: &mut Reporter,
    ) -> CommandResult {
        match description {
            Some(description) => reporter.line(format_args!("Running: {description}")),
            None => reporter.line(format_args!("Running: {command}")),
        }

        let result = self.executor.execute(command).await;

        match result.failure() {
            None => {
                let stdout = result.stdout().trim_end();
                if !stdout.is_empty() {
                    reporter.line(stdout);
                }
            }
            Some(failure) if failure.is_launch_failure() => {
                debug!(cmd = %command, error = %failure, "command could not run");
                reporter.line(format_args!("Exception: {failure}"));
            }
            Some(failure) => {
                debug!(cmd = %command, error = %failure, "command failed");
                reporter.line(format_args!("Error: {}", result.error_text()));
            }
        }

        result
    }
}
