// autopush: stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command shapes.
//!
//! ```text
//! status_porcelain  git status --porcelain
//! status_short      git status --short
//! add_all           git add .
//! commit            git commit -m <message>
//! push              git push <remote> <branch>
//! ```
//!
//! Commands are argument vectors, never shell strings, so a commit message
//! reaches git exactly as typed.

use std::fmt;

/// One invocation of the git executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    args: Vec<String>,
}

impl GitCommand {
    /// Creates a command from raw arguments (without the program name).
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Machine-readable working-tree status.
    #[must_use]
    pub fn status_porcelain() -> Self {
        Self::new(["status", "--porcelain"])
    }

    /// Short human-readable working-tree status.
    #[must_use]
    pub fn status_short() -> Self {
        Self::new(["status", "--short"])
    }

    /// Stage every change under the current directory.
    #[must_use]
    pub fn add_all() -> Self {
        Self::new(["add", "."])
    }

    /// Record a commit with the given message.
    #[must_use]
    pub fn commit(message: &str) -> Self {
        Self::new(["commit", "-m", message])
    }

    /// Push the current branch to `branch` on `remote`.
    #[must_use]
    pub fn push(remote: &str, branch: &str) -> Self {
        Self::new(["push", remote, branch])
    }

    /// Arguments passed to the git executable.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("git")?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {arg:?}")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}
