// envdir-rs: envdir - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered `NAME=VALUE` environment.
//!
//! ```text
//! Environment
//! entries: Vec<Vec<u8>>   raw "NAME=VALUE", insertion order kept
//! push         append, duplicates allowed
//! remove_first drop first "NAME=" prefix match
//! upsert       overwrite first match or append
//! vars_os      (OsString, OsString) pairs for the OS hand-off
//! ```
//!
//! Entries are byte strings. Conversion to `OsString` happens only at the
//! process boundary.

use std::ffi::OsString;

/// An ordered list of `NAME=VALUE` entries.
///
/// Unlike a map, the same name may appear more than once. Lookups are
/// last-wins, matching how the OS hands duplicates to a program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    entries: Vec<Vec<u8>>,
}

impl Environment {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an environment from raw `NAME=VALUE` entries, in order.
    #[must_use]
    pub fn from_entries<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: AsRef<[u8]>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|e| e.as_ref().to_vec())
                .collect(),
        }
    }

    /// Captures the current process environment.
    #[must_use]
    pub fn inherited() -> Self {
        let entries = std::env::vars_os()
            .map(|(k, v)| {
                let mut entry = k.as_encoded_bytes().to_vec();
                entry.push(b'=');
                entry.extend_from_slice(v.as_encoded_bytes());
                entry
            })
            .collect();
        Self { entries }
    }

    /// Appends `name=value` after any existing entries.
    pub fn push(&mut self, name: &[u8], value: &[u8]) -> &mut Self {
        self.entries.push(join(name, value));
        self
    }

    /// Removes the first entry starting with `name=`.
    ///
    /// Returns whether an entry was removed.
    pub fn remove_first(&mut self, name: &[u8]) -> bool {
        match self.position(name) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    /// Overwrites the first entry named `name`, or appends if there is none.
    pub fn upsert(&mut self, name: &[u8], value: &[u8]) -> &mut Self {
        match self.position(name) {
            Some(i) => self.entries[i] = join(name, value),
            None => self.entries.push(join(name, value)),
        }
        self
    }

    /// Returns the value of the last entry named `name`.
    #[must_use]
    pub fn get(&self, name: &[u8]) -> Option<&[u8]> {
        self.entries
            .iter()
            .rev()
            .find_map(|e| strip_name(e, name))
    }

    /// Returns true if at least one entry is named `name`.
    #[must_use]
    pub fn contains(&self, name: &[u8]) -> bool {
        self.position(name).is_some()
    }

    /// Returns an iterator over raw entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.iter().map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries rendered as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn to_lossy_strings(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| String::from_utf8_lossy(e).into_owned())
            .collect()
    }

    /// Splits each entry at its first `=` for the OS.
    ///
    /// Entries without a `=` cannot be represented and are skipped.
    pub fn vars_os(&self) -> impl Iterator<Item = (OsString, OsString)> + '_ {
        self.entries.iter().filter_map(|e| {
            let eq = e.iter().position(|&b| b == b'=')?;
            Some((to_os(&e[..eq]), to_os(&e[eq + 1..])))
        })
    }

    fn position(&self, name: &[u8]) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| strip_name(e, name).is_some())
    }
}

fn join(name: &[u8], value: &[u8]) -> Vec<u8> {
    let mut entry = Vec::with_capacity(name.len() + value.len() + 1);
    entry.extend_from_slice(name);
    entry.push(b'=');
    entry.extend_from_slice(value);
    entry
}

/// Returns the value part if `entry` starts with `name=`.
fn strip_name<'a>(entry: &'a [u8], name: &[u8]) -> Option<&'a [u8]> {
    entry.strip_prefix(name)?.strip_prefix(b"=")
}

#[cfg(unix)]
fn to_os(bytes: &[u8]) -> OsString {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    OsStr::from_bytes(bytes).to_os_string()
}

#[cfg(not(unix))]
fn to_os(bytes: &[u8]) -> OsString {
    OsString::from(String::from_utf8_lossy(bytes).into_owned())
}
