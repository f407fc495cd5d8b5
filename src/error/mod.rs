// autopush: stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!       AppError (16 bytes)
//!           |
//!     +-----+------+
//!     |            |
//!     v            v
//!   Config      Workflow
//!    Box          Box
//!
//! Sub-errors (unboxed internally):
//!   Config    ParseError, InvalidValue
//!   Workflow  Prompt, StatusFailed, StageFailed, CommitFailed, PushFailed
//!
//! Carried as data, never raised on their own:
//!   Process   ExecutableNotFound, SpawnFailed, NonZeroExit, OutputError
//!   Prompt    Cancelled, Interrupted, Io
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Top-level application error type.
///
/// Sub-errors are boxed to keep this enum at two words on the stack.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// The push workflow halted.
    #[error("{0}")]
    Workflow(#[from] Box<WorkflowError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for AppError {
                fn from(err: $error) -> Self {
                    AppError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    WorkflowError => Workflow,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a configuration source.
    #[error("failed to parse config '{source_name}': {message}")]
    ParseError {
        source_name: String,
        message: String,
    },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    ///
    /// `code` is `None` when the process was terminated by a signal.
    #[error("process '{command}' exited with {}", describe_exit(.code))]
    NonZeroExit { command: String, code: Option<i32> },

    /// Failed to collect process output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

#[allow(clippy::ref_option)]
fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(|| "no exit code".to_string(), |c| format!("code {c}"))
}

impl ProcessError {
    /// Whether the process never ran to completion (as opposed to exiting
    /// with a failure status).
    #[must_use]
    pub const fn is_launch_failure(&self) -> bool {
        !matches!(self, Self::NonZeroExit { .. })
    }
}

// --- Prompt Errors ---

/// Errors raised while asking the user for input.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The user dismissed the prompt.
    #[error("prompt cancelled")]
    Cancelled,

    /// The user pressed Ctrl-C.
    #[error("prompt interrupted")]
    Interrupted,

    /// Reading the answer failed.
    #[error("failed to read answer: {0}")]
    Io(#[from] std::io::Error),
}

// --- Workflow Errors ---

/// Reasons the push workflow halts.
///
/// Each variant carries the captured error text of the failed step.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// No commit message could be obtained.
    #[error("failed to read commit message: {0}")]
    Prompt(#[from] PromptError),

    /// The porcelain status query failed.
    #[error("failed to check status: {detail}")]
    StatusFailed { detail: String },

    /// Staging failed.
    #[error("failed to stage changes: {detail}")]
    StageFailed { detail: String },

    /// Creating the commit failed.
    #[error("failed to create commit: {detail}")]
    CommitFailed { detail: String },

    /// Pushing failed.
    #[error("failed to push to {remote}/{branch}: {detail}")]
    PushFailed {
        remote: String,
        branch: String,
        detail: String,
    },
}

#[cfg(test)]
mod tests;
