// autopush: stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! User-facing console transcript.
//!
//! Every line the workflow shows the user goes through a [`Reporter`], so
//! tests can swap stdout for an in-memory buffer.

use std::fmt::Display;
use std::io::Write;

/// Width of the rule printed under the commit message.
pub const RULE_WIDTH: usize = 50;

/// Line-oriented writer for the workflow transcript.
pub struct Reporter {
    out: Box<dyn Write>,
}

impl Reporter {
    /// Reporter writing to the process stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Reporter writing to an arbitrary sink.
    pub fn new(out: impl Write + 'static) -> Self {
        Self { out: Box::new(out) }
    }

    /// Writes one line.
    ///
    /// A closed or broken stdout must not abort a half-finished push, so
    /// write errors are dropped.
    pub fn line(&mut self, text: impl Display) {
        let _ = writeln!(self.out, "{text}");
        let _ = self.out.flush();
    }

    /// Writes an empty line.
    pub fn blank(&mut self) {
        self.line("");
    }

    /// Writes a horizontal rule.
    pub fn rule(&mut self) {
        self.line("-".repeat(RULE_WIDTH));
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for Reporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reporter").finish_non_exhaustive()
    }
}
