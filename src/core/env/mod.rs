// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Environment (ordered Vec of "NAME=VALUE" byte strings)
//! Sources: Environment::inherited(), Environment::new()
//! EnvBuilder: seed + envdir directory --> Environment
//! ```
//!
//! - **Duplicates allowed**: a file appends, lookups are last-wins
//! - **Bytes internal**: `OsString` only at the process boundary

pub mod builder;
pub mod container;
pub mod types;


pub use builder::{EnvBuilder, parse_value};
pub use container::Environment;
pub use types::DuplicatePolicy;

/// Captures the current process environment.
#[must_use]
pub fn current_env() -> Environment {
    Environment::inherited()
}
