// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envdir-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --config FILE
//! 3. ENVDIR_* env vars
//! 4. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVDIR_LOG__LEVEL=4             → log.level = 4
//! ENVDIR_LOG__FILE=/var/log/x     → log.file = "/var/log/x"
//! ENVDIR_ENV__DUPLICATES=replace  → env.duplicates = "replace"
//! ENVDIR_ENV__CLEAR=true          → env.clear = true
//! ```
//!
//! The `ENVDIR_*` variables are read like any other and still reach the
//! child unless a file in the directory unsets them.

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::logging::LogConfig;

use loader::ConfigLoader;
use types::{EnvSettings, LogSettings};

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "ENVDIR";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging options.
    pub log: LogSettings,
    /// Environment assembly options.
    pub env: EnvSettings,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envdir_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("/etc/envdir.toml")
    ///     .with_env_prefix("ENVDIR")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Logging setup derived from the `[log]` section.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::builder()
            .with_console_level(self.log.level)
            .with_file_level(self.log.file_level)
            .maybe_with_log_file(self.log.file.clone())
            .build()
    }
}
