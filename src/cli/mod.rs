// autopush: stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for autopush using clap derive.
//!
//! # Command Line
//!
//! ```text
//! autopush [--long-option VALUE]... [--] [MESSAGE]...
//!
//! autopush Fix the parser           message "Fix the parser"
//! autopush -l 3 fix                 message "-l 3 fix"
//! autopush --log-level 4 Fix it     message "Fix it", debug logs
//! autopush -- --log-level is 4      message "--log-level is 4"
//! autopush                          prompt for a message
//! ```
//!
//! Only the long options below are recognized. Any other token, dashed or
//! not, starts the message. There is no `-h` and no `--version`.

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use clap::Parser;

/// Stage, commit and push in one step.
#[derive(Debug, Parser)]
#[command(
    name = "autopush",
    author,
    version,
    disable_help_flag = true,
    disable_version_flag = true,
    about = "Stage, commit and push all changes in one step",
    long_about = "autopush Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Checks the working tree, stages everything, commits with the\n\
                  given message plus an attribution footer, and pushes to\n\
                  origin/main. Without a message, asks for one; an empty answer\n\
                  uses a timestamped default.",
    after_help = "MESSAGE:\n\n\
                  Every token that is not one of the long options above is part of\n\
                  the message, including tokens such as -l or --version. Put `--`\n\
                  first to commit a message that starts with one of the options.\n\n\
                  CONFIGURATION:\n\n\
                  Nothing is read from the working tree or the environment. Settings\n\
                  come only from --config files and --set overrides\n\
                  (--set git.branch=trunk). Later sources win."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Print help.
    #[arg(long, action = clap::ArgAction::Help)]
    pub help: Option<bool>,

    /// Commit message; all remaining words are joined with single spaces.
    #[arg(value_name = "MESSAGE", trailing_var_arg = true, allow_hyphen_values = true)]
    pub message: Vec<String>,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
