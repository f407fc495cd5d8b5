// autopush: stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit message composition.
//!
//! ```text
//! tokens ["Fix", "bug"]  --> "Fix bug"
//! no tokens, blank answer --> "Update project files - 2026-10-19 14:30"
//!
//! with_footer:
//!   Fix bug
//!
//!   🤖 Generated with push script
//!   Timestamp: 2026-10-19 14:30:05
//! ```

use chrono::NaiveDateTime;

/// Question shown when no message was given on the command line.
pub const PROMPT: &str = "Enter commit message (or press Enter for default):";

/// Attribution line placed above the timestamp footer.
pub const DEFAULT_ATTRIBUTION: &str = "🤖 Generated with push script";

const DEFAULT_PREFIX: &str = "Update project files";
const MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M";
const SECOND_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Message given as command-line tokens, joined with single spaces.
///
/// Returns `None` when no tokens were given. Tokens are used verbatim, so an
/// explicit empty argument yields an empty message.
pub fn from_args<S: AsRef<str>>(tokens: &[S]) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }
    let joined: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
    Some(joined.join(" "))
}

/// Message used when the interactive answer is blank.
#[must_use]
pub fn default_message(now: NaiveDateTime) -> String {
    format!("{DEFAULT_PREFIX} - {}", now.format(MINUTE_FORMAT))
}

/// Message from an interactive answer.
///
/// The answer is trimmed; `now` is only sampled when it is blank.
pub fn from_response(response: &str, now: impl FnOnce() -> NaiveDateTime) -> String {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        default_message(now())
    } else {
        trimmed.to_string()
    }
}

/// Full commit body: the message, a blank line, the attribution and a
/// second-resolution timestamp.
#[must_use]
pub fn with_footer(message: &str, attribution: &str, now: NaiveDateTime) -> String {
    format!(
        "{message}\n\n{attribution}\nTimestamp: {}",
        now.format(SECOND_FORMAT)
    )
}
