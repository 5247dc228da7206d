// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process launcher: PATH lookup and process image replacement.
//!
//! ```text
//! Launcher
//!  • new/which
//!  • arg/args/env
//!  • exec()   Unix: execvp-style replacement, returns only on failure
//!             other: spawn + wait + exit with the child's code
//! ```

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::core::env::Environment;
use crate::error::ProcessError;

/// Child program about to take over this process.
#[derive(Debug, Clone)]
pub struct Launcher {
    program: PathBuf,
    name: OsString,
    args: Vec<OsString>,
    env: Option<Environment>,
}

impl Launcher {
    /// Creates a launcher for an already resolved program path.
    ///
    /// The path is also used as `argv[0]`.
    pub fn new(program: impl AsRef<Path>) -> Self {
        let program = program.as_ref().to_path_buf();
        Self {
            name: program.clone().into_os_string(),
            program,
            args: Vec::new(),
            env: None,
        }
    }

    /// Creates a launcher after resolving `name` the way a shell would.
    ///
    /// Names containing a path separator are checked as-is, anything else is
    /// searched in `PATH`. `argv[0]` stays `name` as typed.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::NotFound`] if no executable matches.
    pub fn which(name: impl AsRef<OsStr>) -> Result<Self, ProcessError> {
        let name = name.as_ref();
        let program = which::which(name).map_err(|source| ProcessError::NotFound {
            name: name.to_string_lossy().into_owned(),
            source,
        })?;
        debug!(name = %name.to_string_lossy(), path = %program.display(), "resolved");
        Ok(Self {
            program,
            name: name.to_os_string(),
            args: Vec::new(),
            env: None,
        })
    }

    /// Adds an argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Adds multiple arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets the complete environment of the child.
    ///
    /// Without this the child inherits the current environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Resolved executable path.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Name passed as `argv[0]`.
    #[must_use]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[must_use]
    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    #[must_use]
    pub const fn environment(&self) -> Option<&Environment> {
        self.env.as_ref()
    }

    /// Human readable command line, for logging.
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(OsStr::to_string_lossy)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Builds the `std` command carrying program, `argv[0]`, args and env.
    ///
    /// Duplicate names in the environment collapse here, last one wins.
    pub(crate) fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.arg0(&self.name);
        }
        if let Some(env) = &self.env {
            cmd.env_clear();
            cmd.envs(env.vars_os());
        }
        cmd
    }

    /// Replaces the current process image with the child.
    ///
    /// On success this never returns: PID, open descriptors and process group
    /// belong to the child from here on.
    #[cfg(unix)]
    #[must_use]
    pub fn exec(self) -> ProcessError {
        use std::os::unix::process::CommandExt;

        debug!(cmd = %self.command_line(), "exec");
        let source = self.command().exec();
        ProcessError::ExecFailed {
            name: self.name.to_string_lossy().into_owned(),
            source,
        }
    }

    /// Runs the child and exits with its code.
    ///
    /// Hosts without exec get spawn + wait: the child has its own PID.
    #[cfg(not(unix))]
    #[must_use]
    pub fn exec(self) -> ProcessError {
        debug!(cmd = %self.command_line(), "spawn");
        match self.command().status() {
            Ok(status) => {
                std::process::exit(status.code().unwrap_or(i32::from(crate::error::EXIT_FATAL)))
            }
            Err(source) => ProcessError::ExecFailed {
                name: self.name.to_string_lossy().into_owned(),
                source,
            },
        }
    }
}
