// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::run::{prepare, render_dry_run};
use crate::cli::Cli;
use crate::config::Config;
use crate::core::process::Launcher;
use crate::core::env::Environment;
use crate::error::{DirError, EnvdirError, ProcessError};
use clap::Parser;
use std::fs;
use tempfile::TempDir;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("envdir").chain(args.iter().copied())).unwrap()
}

fn clear_config() -> Config {
    let mut config = Config::default();
    config.env.clear = true;
    config
}

#[cfg(unix)]
#[test]
fn test_prepare_builds_env_and_resolves() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("FOO"), "bar\n").unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    let launcher = prepare(&cli(&[dir_arg, "sh", "-c", "exit 0"]), &clear_config()).unwrap();

    assert!(launcher.program().is_absolute());
    assert_eq!(launcher.name(), "sh");
    assert_eq!(launcher.arguments().len(), 2);
    assert_eq!(
        launcher.environment().unwrap().to_lossy_strings(),
        vec!["FOO=bar"]
    );
}

#[test]
fn test_prepare_fails_before_lookup_on_subdirectory() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    let err = prepare(
        &cli(&[dir_arg, "envdir-no-such-program-xyz"]),
        &clear_config(),
    )
    .unwrap_err();

    let err = err.downcast::<EnvdirError>().unwrap();
    assert!(matches!(err, EnvdirError::Dir(ref e) if matches!(**e, DirError::NotAFile { .. })));
}

#[test]
fn test_prepare_reports_missing_command() {
    let dir = TempDir::new().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    let err = prepare(
        &cli(&[dir_arg, "envdir-no-such-program-xyz"]),
        &clear_config(),
    )
    .unwrap_err();

    let err = err.downcast::<EnvdirError>().unwrap();
    assert!(matches!(err, EnvdirError::Process(ref e) if matches!(**e, ProcessError::NotFound { .. })));
}

#[test]
fn test_render_dry_run_text() {
    let launcher = Launcher::new("/bin/true").env(Environment::from_entries(["A=1", "B=2"]));

    insta::assert_snapshot!(render_dry_run(&launcher, false).unwrap(), @r"
    A=1
    B=2
    ");
}

#[test]
fn test_render_dry_run_json() {
    let launcher = Launcher::new("/bin/echo")
        .arg("hi")
        .env(Environment::from_entries(["A=1"]));

    let json: serde_json::Value =
        serde_json::from_str(&render_dry_run(&launcher, true).unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "command": "/bin/echo",
            "argv0": "/bin/echo",
            "args": ["hi"],
            "env": ["A=1"],
        })
    );
}
