// autopush: stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Spawning and waiting.
//!
//! ```text
//! run()
//!   spawn          --> SpawnFailed
//!   wait + collect --> OutputError
//!   exit != 0      --> NonZeroExit  (unless ALLOW_FAILURE)
//!   --> ProcessOutput
//! ```

use std::fmt::Write as _;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput};
use crate::error::ProcessError;

impl ProcessBuilder {
    /// Program and arguments as one line, quoting arguments with whitespace.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut line = self.program().display().to_string();
        for arg in self.arguments() {
            if arg.contains(char::is_whitespace) {
                let _ = write!(line, " \"{arg}\"");
            } else {
                let _ = write!(line, " {arg}");
            }
        }
        line
    }

    /// Runs the process to completion.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` when the process cannot be spawned, its
    /// output cannot be collected, or it exits non-zero without
    /// `ALLOW_FAILURE`.
    pub async fn run(self) -> Result<ProcessOutput, ProcessError> {
        let line = self.command_line();
        if let Some(dir) = self.working_dir() {
            debug!(cwd = %dir.display(), "cd");
        }
        debug!(cmd = %line, "exec");

        let child = self
            .command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: line.clone(),
                source,
            })?;
        trace!(pid = ?child.id(), "spawned");

        let raw = child
            .wait_with_output()
            .await
            .map_err(|e| ProcessError::OutputError {
                command: line.clone(),
                message: e.to_string(),
            })?;
        let output = ProcessOutput {
            exit_code: raw.status.code(),
            stdout: String::from_utf8_lossy(&raw.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw.stderr).into_owned(),
        };
        trace!(exit_code = ?output.exit_code, "finished");

        if !output.success() && !self.allows_failure() {
            warn!(cmd = %line, stderr = %output.stderr.trim_end(), "process failed");
            return Err(ProcessError::NonZeroExit {
                command: line,
                code: output.exit_code,
            });
        }
        Ok(output)
    }

    fn command(&self) -> Command {
        let mut command = Command::new(self.program());
        command
            .args(self.arguments())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = self.working_dir() {
            command.current_dir(dir);
        }
        command
    }
}
