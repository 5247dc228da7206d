// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        EnvdirError (~24 bytes)
//!                 |
//!   +-------+-----+-----+--------+
//!   |       |           |        |
//!   v       v           v        v
//! Usage   Config       Dir    Process
//! Box<str> Box         Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Config   InvalidValue, Load
//!   Dir      Unreadable, NotAFile, ReadFailed, ShortRead, Walk
//!   Process  NotFound, ExecFailed
//! ```
//!
//! Every variant is fatal: the binary logs it and exits with [`EXIT_FATAL`].
//!
//! Sub-errors already render their cause, so the top-level variants hold them
//! as plain fields and report no `source()`. A fatal line prints each cause
//! once.

use thiserror::Error;

/// Exit code for every fatal condition (usage, scan, lookup, exec).
pub const EXIT_FATAL: u8 = 111;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvdirError`].
pub type EnvdirResult<T> = std::result::Result<T, EnvdirError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvdirError {
    /// Invalid command line.
    #[error("{0}")]
    Usage(Box<str>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(Box<ConfigError>),

    /// Environment directory could not be turned into an environment.
    #[error("{0}")]
    Dir(Box<DirError>),

    /// Child lookup or exec failed.
    #[error("{0}")]
    Process(Box<ProcessError>),
}

/// Create an [`EnvdirError::Usage`].
pub fn usage(message: impl Into<String>) -> EnvdirError {
    EnvdirError::Usage(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvdirError {
                fn from(err: $error) -> Self {
                    EnvdirError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    DirError => Dir,
    ProcessError => Process,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A source could not be read or did not match the `Config` structure.
    #[error("{0}")]
    Load(String),
}

// --- Directory Errors ---

/// Errors raised while scanning an environment directory.
#[derive(Debug, Error)]
pub enum DirError {
    /// The directory itself cannot be read.
    #[error("cannot read directory '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An entry of the directory is a directory.
    #[error("{name} is not a file, but a directory")]
    NotAFile { name: String },

    /// A variable file could not be opened or read.
    #[error("cannot read '{name}': {source}")]
    ReadFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Fewer or more bytes were read than the listing reported.
    #[error("invalid file read size for '{name}', got: {actual}, expected: {expected}")]
    ShortRead {
        name: String,
        expected: u64,
        actual: u64,
    },

    /// Directory traversal failed.
    #[error("cannot list '{path}': {source}")]
    Walk {
        path: String,
        #[source]
        source: ignore::Error,
    },
}

// --- Process Errors ---

/// Child lookup and exec errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("Cannot find '{name}': {source}")]
    NotFound {
        name: String,
        #[source]
        source: which::Error,
    },

    /// The OS refused to run the executable.
    #[error("Cannot start '{name}': {source}")]
    ExecFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
