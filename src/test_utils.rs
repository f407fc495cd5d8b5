// autopush: stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test doubles: a scripted executor and an in-memory console.

use std::cell::RefCell;
use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::console::Reporter;
use crate::git::GitCommand;
use crate::runner::{CommandExecutor, CommandResult};

/// Porcelain output of a working tree with one modified and one new file.
const DIRTY_PORCELAIN: &str = " M src/lib.rs\n?? notes.txt\n";

/// Executor that records every command and answers from a script.
///
/// All commands succeed except the one whose display form starts with
/// `git <fail_on>`, which exits with code 1.
pub(crate) struct FakeExecutor {
    porcelain: String,
    fail_on: Option<&'static str>,
    calls: RefCell<Vec<GitCommand>>,
}

impl FakeExecutor {
    pub(crate) fn dirty() -> Self {
        Self::with_porcelain(DIRTY_PORCELAIN)
    }

    pub(crate) fn clean() -> Self {
        Self::with_porcelain("")
    }

    pub(crate) fn with_porcelain(porcelain: &str) -> Self {
        Self {
            porcelain: porcelain.to_string(),
            fail_on: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) const fn failing_on(mut self, prefix: &'static str) -> Self {
        self.fail_on = Some(prefix);
        self
    }

    /// Display form of every executed command, in order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(ToString::to_string).collect()
    }

    /// Raw commands, in order.
    pub(crate) fn commands(&self) -> Vec<GitCommand> {
        self.calls.borrow().clone()
    }

    /// Whether any executed command starts with `git <prefix>`.
    pub(crate) fn ran(&self, prefix: &str) -> bool {
        let needle = format!("git {prefix}");
        self.calls().iter().any(|call| call.starts_with(&needle))
    }
}

impl CommandExecutor for FakeExecutor {
    async fn execute(&self, command: &GitCommand) -> CommandResult {
        self.calls.borrow_mut().push(command.clone());
        let display = command.to_string();

        if let Some(prefix) = self.fail_on
            && display.starts_with(&format!("git {prefix}"))
        {
            return CommandResult::exited(command, Some(1), "", format!("fatal: {prefix} failed\n"));
        }

        match command.args().first().map(String::as_str) {
            Some("status") => CommandResult::success(self.porcelain.clone()),
            Some("commit") => CommandResult::success("[main 1a2b3c4] commit\n"),
            _ => CommandResult::success(""),
        }
    }
}

/// Cloneable in-memory sink backing a [`Reporter`].
#[derive(Clone, Default)]
pub(crate) struct CapturedOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    /// A reporter writing into a fresh buffer, plus a handle to read it back.
    pub(crate) fn reporter() -> (Reporter, Self) {
        let captured = Self::default();
        (Reporter::new(captured.clone()), captured)
    }

    pub(crate) fn contents(&self) -> String {
        let guard = self
            .buffer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        String::from_utf8_lossy(&guard).into_owned()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
