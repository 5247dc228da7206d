// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment builder: directory of files --> [`Environment`].
//!
//! ```text
//! EnvBuilder::new(seed).with_duplicates(policy).build(dir)
//!        |
//!        v
//!   WalkBuilder (depth 1, sorted by name, no filters)
//!        |
//!   per entry:
//!     ".name"        skip
//!     directory      DirError::NotAFile (whole build fails)
//!     read all       DirError::ReadFailed / ShortRead
//!     0 bytes        remove first "NAME=" entry
//!     otherwise      push (or upsert) NAME=parse_value(content)
//! ```

use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use ignore::WalkBuilder;
use tracing::{debug, trace};

use super::container::Environment;
use super::types::DuplicatePolicy;
use crate::error::DirError;

/// Extracts a variable value from raw file content.
///
/// Keeps everything before the first `\n`, turns NUL bytes into newlines
/// and trims trailing spaces and tabs.
#[must_use]
pub fn parse_value(content: &[u8]) -> Vec<u8> {
    let line = content
        .iter()
        .position(|&b| b == b'\n')
        .map_or(content, |end| &content[..end]);

    let mut value: Vec<u8> = line
        .iter()
        .map(|&b| if b == 0 { b'\n' } else { b })
        .collect();

    while matches!(value.last(), Some(b' ' | b'\t')) {
        value.pop();
    }
    value
}

/// Folds an envdir-style directory into a seed environment.
#[derive(Debug, Clone)]
pub struct EnvBuilder {
    env: Environment,
    duplicates: DuplicatePolicy,
}

impl EnvBuilder {
    /// Starts from `seed`, which is owned by the builder from here on.
    #[must_use]
    pub const fn new(seed: Environment) -> Self {
        Self {
            env: seed,
            duplicates: DuplicatePolicy::Append,
        }
    }

    /// Sets how a file treats an already present variable of the same name.
    #[must_use]
    pub const fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Scans `dir` and returns the finished environment.
    ///
    /// Entries are processed in file name order. Any failure aborts the whole
    /// build; no partial environment is returned.
    ///
    /// # Errors
    ///
    /// - [`DirError::Unreadable`] if `dir` is missing or not a directory.
    /// - [`DirError::Walk`] if the listing fails.
    /// - [`DirError::NotAFile`] if a non-hidden entry is a directory.
    /// - [`DirError::ReadFailed`] / [`DirError::ShortRead`] if a file cannot be
    ///   read completely.
    pub fn build(mut self, dir: &Path) -> Result<Environment, DirError> {
        let meta = std::fs::metadata(dir).map_err(|source| DirError::Unreadable {
            path: dir.display().to_string(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(DirError::Unreadable {
                path: dir.display().to_string(),
                source: std::io::Error::other("not a directory"),
            });
        }

        debug!(dir = %dir.display(), seed = self.env.len(), "scanning");

        let walk = WalkBuilder::new(dir)
            .max_depth(Some(1))
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walk {
            let entry = entry.map_err(|source| DirError::Walk {
                path: dir.display().to_string(),
                source,
            })?;
            if entry.depth() == 0 {
                continue;
            }
            self.apply(entry.file_name(), entry.path())?;
        }

        debug!(vars = self.env.len(), "environment built");
        Ok(self.env)
    }

    fn apply(&mut self, name: &OsStr, path: &Path) -> Result<(), DirError> {
        let shown = name.to_string_lossy();
        let name = name.as_encoded_bytes();

        if name.starts_with(b".") {
            trace!(name = %shown, "skipping hidden entry");
            return Ok(());
        }

        let read_failed = |source| DirError::ReadFailed {
            name: shown.to_string(),
            source,
        };

        // Symlinks are followed: a link to a directory is still a directory.
        let meta = std::fs::metadata(path).map_err(read_failed)?;
        if meta.is_dir() {
            return Err(DirError::NotAFile {
                name: shown.to_string(),
            });
        }

        let expected = meta.len();
        let mut content = Vec::new();
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut content))
            .map_err(read_failed)?;

        let actual = content.len() as u64;
        if actual != expected {
            return Err(DirError::ShortRead {
                name: shown.to_string(),
                expected,
                actual,
            });
        }

        if expected == 0 {
            let removed = self.env.remove_first(name);
            debug!(name = %shown, removed, "unset");
            return Ok(());
        }

        let value = parse_value(&content);
        match self.duplicates {
            DuplicatePolicy::Append => self.env.push(name, &value),
            DuplicatePolicy::Replace => self.env.upsert(name, &value),
        };
        debug!(name = %shown, "set");
        trace!(name = %shown, value = %String::from_utf8_lossy(&value));
        Ok(())
    }
}
