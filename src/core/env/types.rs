// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! ```text
//! DuplicatePolicy: Append (default) | Replace
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What a non-empty variable file does when its name is already present.
///
/// `Append` is envdir's behaviour: the entry is added again after the
/// earlier one and consumers see the last occurrence. `Replace` overwrites
/// the first existing entry in place.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    #[default]
    Append,
    Replace,
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Append => write!(f, "append"),
            Self::Replace => write!(f, "replace"),
        }
    }
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "append" => Ok(Self::Append),
            "replace" => Ok(Self::Replace),
            _ => Err(ConfigError::InvalidValue {
                section: "env".to_string(),
                key: "duplicates".to_string(),
                message: format!("expected 'append' or 'replace', got '{s}'"),
            }),
        }
    }
}
