// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::try_parse() --> Config --> Logging --> run_envdir
//!                                              |
//!                          exec (no return) or fatal: log + exit 111
//! ```

use std::fmt::Display;
use std::process::ExitCode;

use envdir_rs::cli::global::GlobalOptions;
use envdir_rs::cli::{self, USAGE};
use envdir_rs::cmd::run::run_envdir;
use envdir_rs::config::loader::ConfigLoader;
use envdir_rs::config::{Config, ENV_PREFIX};
use envdir_rs::error::{EXIT_FATAL, usage};
use envdir_rs::logging::{LogConfig, LogGuard, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = match cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if cli::is_informational(&e) => {
            // stdout belongs to the child, help and version go to stderr
            eprint!("{}", e.render());
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _log_guard = init_default_logging();
            tracing::debug!(kind = ?e.kind(), "invalid arguments");
            return fatal(usage(USAGE));
        }
    };

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            let _log_guard = init_default_logging();
            return fatal(format_args!("{e:#}"));
        }
    };

    let log_guard = match init_logging(&config.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::from(EXIT_FATAL);
        }
    };

    match run_envdir(&cli, &config, log_guard) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fatal(format_args!("{e:#}")),
    }
}

fn init_default_logging() -> Option<LogGuard> {
    init_logging(&LogConfig::default()).ok()
}

fn fatal(message: impl Display) -> ExitCode {
    tracing::error!("{message}");
    ExitCode::from(EXIT_FATAL)
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let loader = ConfigLoader::new();
    let loader = match &global.config {
        Some(path) => loader.add_toml_file(path),
        None => loader,
    };
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> envdir_rs::error::Result<Config> {
    global.apply_overrides(build_config_loader(global))?.build()
}
