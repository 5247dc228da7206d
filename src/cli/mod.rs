// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envdir-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envdir [global options] <dir> <command> [args...]
//! ```
//!
//! Everything from `<command>` on is handed to the child untouched.

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Usage line logged when the positional arguments are missing.
pub const USAGE: &str = "usage: envdir dir command";

/// envdir - Rust Port
///
/// Runs a program with environment variables loaded from a directory.
#[derive(Debug, Parser)]
#[command(
    name = "envdir",
    author,
    version,
    about = "Run a program with environment variables loaded from a directory",
    long_about = "envdir-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Runs <COMMAND> with environment variables loaded from <DIR>.\n\n\
                  Each regular file in <DIR> sets one variable named after the\n\
                  file, valued by the first line of its content. NUL bytes in\n\
                  that line become newlines and trailing spaces and tabs are\n\
                  removed. An empty file unsets the variable. Files starting\n\
                  with '.' are ignored, a subdirectory is an error.",
    after_help = "EXIT STATUS:\n\n\
                  envdir replaces itself with <COMMAND>, so the exit status is the\n\
                  command's own. If envdir cannot run the command it exits 111."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Directory holding one file per variable.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Program to run, followed by its arguments.
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<OsString>,
}

impl Cli {
    /// Name of the program to run, as typed.
    #[must_use]
    pub fn program(&self) -> &OsStr {
        self.command.first().map_or_else(|| OsStr::new(""), OsString::as_os_str)
    }

    /// Arguments following the program name.
    #[must_use]
    pub fn program_args(&self) -> &[OsString] {
        self.command.get(1..).unwrap_or_default()
    }
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}

/// Whether a parse error is really a help or version request.
#[must_use]
pub fn is_informational(err: &clap::Error) -> bool {
    use clap::error::ErrorKind;
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}
