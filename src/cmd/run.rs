// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The envdir command.
//!
//! ```text
//! seed (inherited | empty)
//!   --> EnvBuilder::build(dir)       any error: fatal, nothing launched
//!   --> Launcher::which(command)
//!   --> --dry ? print : drop LogGuard, exec
//! ```

use serde::Serialize;
use tracing::info;

use crate::cli::Cli;
use crate::config::Config;
use crate::core::env::{EnvBuilder, Environment, current_env};
use crate::core::process::Launcher;
use crate::error::{EnvdirError, Result};
use crate::logging::LogGuard;

/// What `--dry --json` prints.
#[derive(Debug, Serialize)]
struct DryRun {
    command: String,
    argv0: String,
    args: Vec<String>,
    env: Vec<String>,
}

/// Builds the environment from `cli.dir` and hands the process to the command.
///
/// Returns only for `--dry` or on failure. The log guard is dropped right
/// before exec so buffered file logs reach the disk.
///
/// # Errors
///
/// Returns an error if the directory cannot be turned into an environment,
/// the command cannot be found, or the exec fails.
pub fn run_envdir(cli: &Cli, config: &Config, log_guard: LogGuard) -> Result<()> {
    let launcher = prepare(cli, config)?;

    if cli.global.dry {
        println!("{}", render_dry_run(&launcher, cli.global.json)?);
        return Ok(());
    }

    info!(cmd = %launcher.command_line(), "exec");
    drop(log_guard);
    Err(EnvdirError::from(launcher.exec()).into())
}

/// Builds the environment and resolves the command, without running it.
///
/// # Errors
///
/// Returns an error if the directory cannot be turned into an environment or
/// the command cannot be found.
pub fn prepare(cli: &Cli, config: &Config) -> Result<Launcher> {
    let seed = if config.env.clear {
        Environment::new()
    } else {
        current_env()
    };

    let env = EnvBuilder::new(seed)
        .with_duplicates(config.env.duplicates)
        .build(&cli.dir)
        .map_err(EnvdirError::from)?;

    let launcher = Launcher::which(cli.program())
        .map_err(EnvdirError::from)?
        .args(cli.program_args().iter().cloned())
        .env(env);

    Ok(launcher)
}

/// Renders the launcher for `--dry`: one entry per line, or a JSON object.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_dry_run(launcher: &Launcher, json: bool) -> Result<String> {
    let env = launcher
        .environment()
        .map(Environment::to_lossy_strings)
        .unwrap_or_default();

    if !json {
        return Ok(env.join("\n"));
    }

    let dry = DryRun {
        command: launcher.program().display().to_string(),
        argv0: launcher.name().to_string_lossy().into_owned(),
        args: launcher
            .arguments()
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect(),
        env,
    };
    Ok(serde_json::to_string_pretty(&dry)?)
}
