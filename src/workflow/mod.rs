// autopush: stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The push workflow.
//!
//! ```text
//! DetermineMessage   args joined, or prompt (blank -> timestamped default)
//!        |
//!        v
//! CheckStatus        git status --porcelain   fail -> halt
//!        |                                    empty -> NoChanges
//!        v
//! ShowStatus         git status --short       display only
//!        |
//!        v
//! StageAll           git add .                fail -> halt
//!        |
//!        v
//! Commit             git commit -m <footer>   fail -> halt
//!        |
//!        v
//! Push               git push origin main     fail -> halt
//!        |
//!        v
//! Done               banner + message
//! ```
//!
//! Every step waits for the previous one. There is no retry and no
//! rollback: the first failure ends the run.

pub mod clock;
pub mod message;
pub mod prompt;


use tracing::{debug, info};

use crate::config::Config;
use crate::console::Reporter;
use crate::error::WorkflowError;
use crate::git::GitCommand;
use crate::runner::{CommandExecutor, CommandRunner};

use clock::{Clock, SystemClock};
use prompt::MessagePrompt;

/// Remote, branch and attribution used by the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushSettings {
    pub remote: String,
    pub branch: String,
    pub attribution: String,
}

impl Default for PushSettings {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            branch: "main".to_string(),
            attribution: message::DEFAULT_ATTRIBUTION.to_string(),
        }
    }
}

impl From<&Config> for PushSettings {
    fn from(config: &Config) -> Self {
        Self {
            remote: config.git.remote.clone(),
            branch: config.git.branch.clone(),
            attribution: config.commit.attribution.clone(),
        }
    }
}

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Changes were committed and pushed.
    Pushed { message: String },
    /// The working tree was clean; nothing ran after the status check.
    NoChanges,
}

/// Stage, commit and push sequence over a [`CommandExecutor`].
pub struct PushWorkflow<E> {
    runner: CommandRunner<E>,
    prompt: Box<dyn MessagePrompt>,
    clock: Box<dyn Clock>,
    reporter: Reporter,
    settings: PushSettings,
}

impl<E: CommandExecutor> PushWorkflow<E> {
    /// Workflow using the system clock, stdout and default settings.
    pub fn new(executor: E, prompt: impl MessagePrompt + 'static) -> Self {
        Self {
            runner: CommandRunner::new(executor),
            prompt: Box::new(prompt),
            clock: Box::new(SystemClock),
            reporter: Reporter::stdout(),
            settings: PushSettings::default(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: PushSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The executor commands are sent to.
    pub const fn executor(&self) -> &E {
        self.runner.executor()
    }

    /// Runs the workflow with the command-line message tokens.
    ///
    /// # Errors
    ///
    /// Returns a `WorkflowError` naming the step that halted the run. The
    /// diagnostic has already been printed when this returns.
    pub async fn run<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<Outcome, WorkflowError> {
        let message = self.determine_message(tokens)?;
        self.reporter.line(format_args!("Commit message: {message}"));
        self.reporter.rule();

        if !self.check_status().await? {
            self.reporter.line("No changes to commit!");
            info!("working tree clean, nothing to push");
            return Ok(Outcome::NoChanges);
        }

        self.show_status().await;
        self.stage_all().await?;
        self.commit(&message).await?;
        self.push().await?;

        self.reporter.blank();
        self.reporter.line(format_args!(
            "✅ Successfully pushed to {}/{}!",
            self.settings.remote, self.settings.branch
        ));
        self.reporter.line(format_args!("Commit message: {message}"));
        info!(remote = %self.settings.remote, branch = %self.settings.branch, "pushed");

        Ok(Outcome::Pushed { message })
    }

    fn determine_message<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<String, WorkflowError> {
        if let Some(message) = message::from_args(tokens) {
            return Ok(message);
        }

        match self.prompt.ask(message::PROMPT) {
            Ok(answer) => Ok(message::from_response(&answer, || self.clock.now())),
            Err(e) => {
                self.reporter.line(format_args!("Failed to read commit message: {e}"));
                Err(e.into())
            }
        }
    }

    /// Returns whether the working tree has changes.
    async fn check_status(&mut self) -> Result<bool, WorkflowError> {
        let result = self
            .runner
            .run(
                &GitCommand::status_porcelain(),
                Some("Checking git status"),
                &mut self.reporter,
            )
            .await;

        if !result.succeeded() {
            self.reporter.line("Failed to check git status");
            return Err(WorkflowError::StatusFailed {
                detail: result.error_text(),
            });
        }

        let dirty = !result.stdout().trim().is_empty();
        debug!(dirty, "status checked");
        Ok(dirty)
    }

    async fn show_status(&mut self) {
        self.reporter.line("Files to be committed:");
        let result = self
            .runner
            .run(
                &GitCommand::status_short(),
                Some("Showing file status"),
                &mut self.reporter,
            )
            .await;
        if !result.succeeded() {
            debug!("short status failed, continuing");
        }
    }

    async fn stage_all(&mut self) -> Result<(), WorkflowError> {
        let result = self
            .runner
            .run(
                &GitCommand::add_all(),
                Some("Adding all changes"),
                &mut self.reporter,
            )
            .await;

        if !result.succeeded() {
            self.reporter.line("Failed to add files");
            return Err(WorkflowError::StageFailed {
                detail: result.error_text(),
            });
        }
        Ok(())
    }

    async fn commit(&mut self, message: &str) -> Result<(), WorkflowError> {
        let body = message::with_footer(message, &self.settings.attribution, self.clock.now());
        let result = self
            .runner
            .run(
                &GitCommand::commit(&body),
                Some("Creating commit"),
                &mut self.reporter,
            )
            .await;

        if !result.succeeded() {
            self.reporter.line("Failed to create commit");
            return Err(WorkflowError::CommitFailed {
                detail: result.error_text(),
            });
        }
        Ok(())
    }

    async fn push(&mut self) -> Result<(), WorkflowError> {
        let remote = self.settings.remote.clone();
        let branch = self.settings.branch.clone();
        let description = format!("Pushing to {remote}/{branch}");
        let result = self
            .runner
            .run(
                &GitCommand::push(&remote, &branch),
                Some(&description),
                &mut self.reporter,
            )
            .await;

        if !result.succeeded() {
            self.reporter.line(format_args!("Failed to push to {remote}/{branch}"));
            return Err(WorkflowError::PushFailed {
                remote,
                branch,
                detail: result.error_text(),
            });
        }
        Ok(())
    }
}
