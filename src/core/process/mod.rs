// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Child process hand-off.
//!
//! ```text
//! Launcher::which("daemon")
//!   .args() .env(Environment)
//!   .exec()
//!       --> std::process::Command (env_clear + envs, arg0)
//!           Unix: CommandExt::exec, no return on success
//!       --> ProcessError { NotFound | ExecFailed }
//! ```

pub mod launcher;
#[cfg(test)]
mod tests;

pub use launcher::Launcher;
