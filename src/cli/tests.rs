// autopush: stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::Cli;
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

#[test]
fn test_parse_message_tokens() {
    let cli = Cli::try_parse_from(["autopush", "Fix", "bug"]).unwrap();
    assert_eq!(cli.message, ["Fix", "bug"]);
    assert!(cli.global.configs.is_empty());
}

#[test]
fn test_parse_no_message() {
    let cli = Cli::try_parse_from(["autopush"]).unwrap();
    assert!(cli.message.is_empty());
}

#[test]
fn test_hyphen_tokens_after_message_are_kept() {
    let cli = Cli::try_parse_from(["autopush", "Fix", "--log-level", "--flag"]).unwrap();
    assert_eq!(cli.message, ["Fix", "--log-level", "--flag"]);
    assert_eq!(cli.global.log_level, None);
}

#[test]
fn test_short_dashed_tokens_start_the_message() {
    let cli = Cli::try_parse_from(["autopush", "-l", "3", "fix"]).unwrap();
    assert_eq!(cli.message, ["-l", "3", "fix"]);
    assert_eq!(cli.global.log_level, None);

    let cli = Cli::try_parse_from(["autopush", "-c", "notes.md"]).unwrap();
    assert_eq!(cli.message, ["-c", "notes.md"]);
    assert!(cli.global.configs.is_empty());

    let cli = Cli::try_parse_from(["autopush", "-h"]).unwrap();
    assert_eq!(cli.message, ["-h"]);
}

#[test]
fn test_unknown_long_tokens_start_the_message() {
    let cli = Cli::try_parse_from(["autopush", "--version"]).unwrap();
    assert_eq!(cli.message, ["--version"]);

    let cli = Cli::try_parse_from(["autopush", "--bogus", "value"]).unwrap();
    assert_eq!(cli.message, ["--bogus", "value"]);
}

#[test]
fn test_double_dash_quotes_option_names() {
    let cli = Cli::try_parse_from(["autopush", "--", "--log-level", "3", "fix"]).unwrap();
    assert_eq!(cli.message, ["--log-level", "3", "fix"]);
    assert_eq!(cli.global.log_level, None);
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "autopush",
        "--log-level",
        "4",
        "--file-log-level",
        "5",
        "--log-file",
        "push.log",
        "--config",
        "a.toml",
        "--config",
        "b.toml",
        "--set",
        "git.branch=trunk",
        "Ship",
        "it",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.file_log_level, Some(5));
    assert_eq!(cli.global.log_file, Some(PathBuf::from("push.log")));
    assert_eq!(
        cli.global.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(cli.global.options, ["git.branch=trunk"]);
    assert_eq!(cli.message, ["Ship", "it"]);
}

#[test]
fn test_log_level_out_of_range() {
    let err = Cli::try_parse_from(["autopush", "--log-level", "6", "msg"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn test_long_help_flag() {
    let err = Cli::try_parse_from(["autopush", "--help"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
}

#[test]
fn test_command_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
