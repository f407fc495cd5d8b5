// autopush: stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)       cmd::push (handler)
//!                |                     |
//!                v                     v
//!          config (TOML,          workflow
//!          env, --set)     message / clock / prompt
//!                                      |
//!                                      v
//!                          runner (CommandExecutor)
//!                           |                  |
//!                           v                  v
//!                     git (argv)      console (Reporter)
//!
//!   +-----------------------------------------+
//!   |  core   process builder and runner      |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod console;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod runner;
pub mod workflow;

#[cfg(test)]
mod test_utils;
