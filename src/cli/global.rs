// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← TOML configuration file
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity
//! --log-file FILE   ← Append logs to FILE
//! --duplicates P    ← append | replace
//! --clear-env       ← Start from an empty environment
//! --dry / --json    ← Print instead of exec
//!
//! Precedence: CLI flags > ENVDIR_* > --config > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::core::env::DuplicatePolicy;
use crate::error::Result;

/// Options placed before `<DIR>`.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to a TOML configuration file.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// What a file does when its variable is already set.
    #[arg(long = "duplicates", value_name = "POLICY", value_enum)]
    pub duplicates: Option<DuplicatePolicy>,

    /// Ignores the inherited environment, the directory alone defines it.
    #[arg(long = "clear-env")]
    pub clear_env: bool,

    /// Prints the environment and resolved command instead of running it.
    #[arg(long)]
    pub dry: bool,

    /// With --dry, prints JSON.
    #[arg(long, requires = "dry")]
    pub json: bool,
}

impl GlobalOptions {
    /// Applies command-line options as the highest priority config layer.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be stored.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        if let Some(level) = self.log_level {
            loader = loader.set("log.level", i64::from(level))?;
        }

        if let Some(level) = self.file_log_level {
            loader = loader.set("log.file_level", i64::from(level))?;
        }

        if let Some(ref path) = self.log_file {
            loader = loader.set("log.file", path.display().to_string())?;
        }

        if let Some(policy) = self.duplicates {
            loader = loader.set("env.duplicates", policy.to_string())?;
        }

        if self.clear_env {
            loader = loader.set("env.clear", true)?;
        }

        Ok(loader)
    }
}
