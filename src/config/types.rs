// autopush: stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [git]     remote, branch
//! [commit]  attribution
//! [log]     console, file, path
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;
use crate::workflow::message::DEFAULT_ATTRIBUTION;

/// Push target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    pub remote: String,
    pub branch: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            branch: "main".to_string(),
        }
    }
}

impl GitConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        non_empty("git", "remote", &self.remote)?;
        non_empty("git", "branch", &self.branch)
    }
}

/// Commit footer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommitConfig {
    /// Line placed between the message and the timestamp.
    pub attribution: String,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            attribution: DEFAULT_ATTRIBUTION.to_string(),
        }
    }
}

/// Log verbosity and optional log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Console verbosity. Warnings and errors only by default, so the
    /// transcript on stdout is not interleaved with progress logs.
    pub console: LogLevel,
    /// Log file verbosity.
    pub file: LogLevel,
    /// Log file location; no file is written when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            console: LogLevel::WARN,
            file: LogLevel::TRACE,
            path: None,
        }
    }
}

fn non_empty(section: &str, key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}
