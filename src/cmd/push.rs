// autopush: stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Push command implementation.

use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::runner::ProcessExecutor;
use crate::workflow::prompt::InquirePrompt;
use crate::workflow::{Outcome, PushSettings, PushWorkflow};

/// Runs the push workflow in the current directory.
///
/// # Errors
///
/// Returns an error if any step halted the run or the commit message could
/// not be read. The step's diagnostic has already been printed to stdout.
pub async fn run_push_command(message: &[String], config: &Config) -> Result<Outcome> {
    let executor = ProcessExecutor::default();
    let mut workflow =
        PushWorkflow::new(executor, InquirePrompt).with_settings(PushSettings::from(config));

    match workflow.run(message).await {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            debug!(error = %e, "push halted");
            Err(AppError::from(e).into())
        }
    }
}
