// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for envdir-rs.
//!
//! ```text
//! [log]  level, file_level, file
//! [env]  duplicates (append | replace), clear
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::env::DuplicatePolicy;
use crate::logging::LogLevel;

/// Logging options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log level for stderr output (0-5).
    pub level: LogLevel,
    /// Log level for file output (0-5).
    pub file_level: LogLevel,
    /// Path to an optional log file, appended to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::WARN,
            file_level: LogLevel::DEBUG,
            file: None,
        }
    }
}

/// How the child environment is assembled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvSettings {
    /// What a file does when its variable is already set.
    pub duplicates: DuplicatePolicy,
    /// Start from an empty environment instead of the inherited one.
    pub clear: bool,
}
