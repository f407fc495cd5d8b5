// autopush: stage, commit and push in one step
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> run_push_command --> ExitCode
//! ```

use std::process::ExitCode;

use autopush::cli::{self, global::GlobalOptions};
use autopush::cmd::push::run_push_command;
use autopush::config::loader::ConfigLoader;
use autopush::config::Config;
use autopush::logging::{LogConfig, LogLevel, init_logging};
use autopush::workflow::Outcome;
use tracing::debug;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let sources = loader.format_loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&cli.global, &config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };
    for source in &sources {
        debug!(source = %source, "config source");
    }

    match run_push_command(&cli.message, &config).await {
        Ok(Outcome::Pushed { .. } | Outcome::NoChanges) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// CLI flags win over the configured log settings.
fn build_log_config(global: &GlobalOptions, config: &Config) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.log.console);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.log.file);

    let log_file = global.log_file.as_ref().or(config.log.path.as_ref());

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(log_file.cloned())
        .build()
}

/// Only sources named on the command line are read.
fn build_config_loader(global: &GlobalOptions) -> autopush::error::Result<ConfigLoader> {
    global
        .configs
        .iter()
        .fold(ConfigLoader::new(), ConfigLoader::add_toml_file)
        .set_all(&global.options)
}
