// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Launcher;
use crate::core::env::Environment;
use crate::error::ProcessError;
use std::ffi::{OsStr, OsString};

#[test]
fn test_which_missing_executable() {
    let err = Launcher::which("envdir-no-such-program-xyz").unwrap_err();

    assert!(matches!(err, ProcessError::NotFound { ref name, .. } if name == "envdir-no-such-program-xyz"));
    assert!(err.to_string().starts_with("Cannot find 'envdir-no-such-program-xyz': "));
}

#[cfg(unix)]
#[test]
fn test_which_resolves_from_path() {
    let launcher = Launcher::which("sh").unwrap();

    assert!(launcher.program().is_absolute());
    assert_eq!(launcher.name(), OsStr::new("sh"));
}

#[cfg(unix)]
#[test]
fn test_which_keeps_qualified_path() {
    let launcher = Launcher::which("/bin/sh").unwrap();

    assert_eq!(launcher.program(), std::path::Path::new("/bin/sh"));
    assert_eq!(launcher.name(), OsStr::new("/bin/sh"));
}

#[test]
fn test_command_line() {
    let launcher = Launcher::new("/usr/bin/daemon").arg("-f").args(["a b", "c"]);

    insta::assert_snapshot!(launcher.command_line(), @"/usr/bin/daemon -f a b c");
    assert_eq!(launcher.arguments().len(), 3);
}

#[test]
fn test_command_replaces_environment() {
    let env = Environment::from_entries(["FOO=one", "BAR=x", "FOO=two"]);
    let launcher = Launcher::new("/usr/bin/env").env(env);

    let cmd = launcher.command();
    let mut envs: Vec<(OsString, Option<OsString>)> = cmd
        .get_envs()
        .map(|(k, v)| (k.to_os_string(), v.map(OsStr::to_os_string)))
        .collect();
    envs.sort();

    let expected: Vec<(OsString, Option<OsString>)> = vec![
        ("BAR".into(), Some("x".into())),
        ("FOO".into(), Some("two".into())),
    ];
    assert_eq!(envs, expected);
}

#[test]
fn test_command_without_env_inherits() {
    let cmd = Launcher::new("/usr/bin/env").command();

    assert_eq!(cmd.get_envs().count(), 0);
}

#[cfg(unix)]
#[test]
fn test_exec_non_executable_returns_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let script = dir.path().join("not-executable");
    std::fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();

    let err = Launcher::new(&script).exec();

    match err {
        ProcessError::ExecFailed { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
        }
        other @ ProcessError::NotFound { .. } => panic!("unexpected error: {other}"),
    }
}
