// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment building and process hand-off.
//!
//! ```text
//!              core
//!               |
//!        +------+------+
//!        v             v
//!       env         process
//!        |             |
//!   Environment    Launcher
//!   EnvBuilder     which + exec
//! ```

pub mod env;
pub mod process;
