// autopush: stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{AppError, ConfigError, ProcessError, WorkflowError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "git".to_string(),
        key: "remote".to_string(),
        message: "must not be empty".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'remote' in section '[git]': must not be empty");
}

#[test]
fn test_non_zero_exit_display() {
    let exited = ProcessError::NonZeroExit {
        command: "git push origin main".to_string(),
        code: Some(128),
    };
    let signalled = ProcessError::NonZeroExit {
        command: "git push origin main".to_string(),
        code: None,
    };
    insta::assert_snapshot!(exited.to_string(), @"process 'git push origin main' exited with code 128");
    insta::assert_snapshot!(signalled.to_string(), @"process 'git push origin main' exited with no exit code");
}

#[test]
fn test_launch_failure_classification() {
    let missing = ProcessError::ExecutableNotFound {
        name: "git".to_string(),
    };
    let exited = ProcessError::NonZeroExit {
        command: "git add .".to_string(),
        code: Some(1),
    };
    assert!(missing.is_launch_failure());
    assert!(!exited.is_launch_failure());
}

#[test]
fn test_workflow_error_converts_to_app_error() {
    let err: AppError = WorkflowError::PushFailed {
        remote: "origin".to_string(),
        branch: "main".to_string(),
        detail: "rejected".to_string(),
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"failed to push to origin/main: rejected");
}

#[test]
fn test_config_error_converts_to_app_error() {
    let err: AppError = ConfigError::ParseError {
        source_name: "--set".to_string(),
        message: "expected KEY=VALUE, got 'git'".to_string(),
    }
    .into();
    assert!(matches!(err, AppError::Config(_)));
    insta::assert_snapshot!(err.to_string(), @"config error: failed to parse config '--set': expected KEY=VALUE, got 'git'");
}

#[test]
fn test_app_error_size() {
    let size = std::mem::size_of::<AppError>();
    assert!(size <= 16, "AppError is {size} bytes, expected <= 16");

    let size = std::mem::size_of::<Result<(), AppError>>();
    assert!(size <= 16, "Result<(), AppError> is {size} bytes, expected <= 16");
}
