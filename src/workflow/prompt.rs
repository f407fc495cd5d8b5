// autopush: stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive commit message prompt.
//!
//! ```text
//! InquirePrompt::ask
//!   terminal   --> inquire::Text
//!   not a TTY  --> one line from stdin (EOF = blank answer)
//! ```

use inquire::{InquireError, Text};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::error::PromptError;

/// Asks the user a free-text question.
pub trait MessagePrompt {
    /// Returns the raw answer; blank answers are valid.
    ///
    /// # Errors
    ///
    /// Returns a `PromptError` if the user cancels or input cannot be read.
    fn ask(&self, question: &str) -> Result<String, PromptError>;
}

/// Terminal prompt backed by `inquire`, with a plain stdin fallback for
/// piped input.
#[derive(Debug, Clone, Copy, Default)]
pub struct InquirePrompt;

impl MessagePrompt for InquirePrompt {
    fn ask(&self, question: &str) -> Result<String, PromptError> {
        match Text::new(question).prompt() {
            Ok(answer) => Ok(answer),
            Err(InquireError::NotTTY) => {
                debug!("stdin is not a terminal, reading answer as a plain line");
                let mut stdout = std::io::stdout();
                write!(stdout, "{question} ")?;
                stdout.flush()?;
                read_answer(&mut std::io::stdin().lock())
            }
            Err(InquireError::OperationCanceled) => Err(PromptError::Cancelled),
            Err(InquireError::OperationInterrupted) => Err(PromptError::Interrupted),
            Err(InquireError::IO(e)) => Err(PromptError::Io(e)),
            Err(e) => Err(PromptError::Io(std::io::Error::other(e))),
        }
    }
}

/// Reads one answer line; end of input counts as a blank answer.
///
/// # Errors
///
/// Returns `PromptError::Io` if reading fails.
pub fn read_answer(input: &mut impl BufRead) -> Result<String, PromptError> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
