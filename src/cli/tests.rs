// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, is_informational};
use crate::config::loader::ConfigLoader;
use crate::core::env::DuplicatePolicy;
use crate::logging::LogLevel;
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::path::Path;

#[test]
fn test_parse_dir_and_command() {
    let cli = Cli::try_parse_from(["envdir", "/etc/app/env", "true"]).unwrap();

    assert_eq!(cli.dir, Path::new("/etc/app/env"));
    assert_eq!(cli.program(), "true");
    assert!(cli.program_args().is_empty());
}

#[test]
fn test_child_args_pass_through() {
    let cli = Cli::try_parse_from([
        "envdir", "-l", "4", "env", "daemon", "--dry", "-l", "9", "x",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(4));
    assert!(!cli.global.dry);
    assert_eq!(cli.program(), "daemon");
    let expected: Vec<OsString> = ["--dry", "-l", "9", "x"]
        .into_iter()
        .map(OsString::from)
        .collect();
    assert_eq!(cli.program_args(), expected.as_slice());
}

#[test]
fn test_missing_command_is_usage_error() {
    let err = Cli::try_parse_from(["envdir", "dir"]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    assert!(!is_informational(&err));
}

#[test]
fn test_no_arguments_is_usage_error() {
    let err = Cli::try_parse_from(["envdir"]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_help_is_informational() {
    let err = Cli::try_parse_from(["envdir", "--help"]).unwrap_err();

    assert!(is_informational(&err));
}

#[test]
fn test_json_requires_dry() {
    assert!(Cli::try_parse_from(["envdir", "--json", "dir", "true"]).is_err());
    assert!(Cli::try_parse_from(["envdir", "--dry", "--json", "dir", "true"]).is_ok());
}

#[test]
fn test_log_level_range_enforced() {
    assert!(Cli::try_parse_from(["envdir", "-l", "6", "dir", "true"]).is_err());
}

#[test]
fn test_overrides_reach_config() {
    let cli = Cli::try_parse_from([
        "envdir",
        "-l",
        "5",
        "--duplicates",
        "replace",
        "--clear-env",
        "dir",
        "true",
    ])
    .unwrap();

    let config = cli
        .global
        .apply_overrides(ConfigLoader::new())
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.log.level, LogLevel::TRACE);
    assert_eq!(config.env.duplicates, DuplicatePolicy::Replace);
    assert!(config.env.clear);
}

#[test]
fn test_cli_debug_assert() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
