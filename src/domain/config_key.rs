// SPDX-License-Identifier: MIT OR Apache-2.0

//! Case-insensitive configuration key.
//!
//! This module provides the `ConfigKey` type, a newtype around `String` whose
//! equality and hashing ignore case, together with helpers for building and
//! matching hierarchical keys such as `database:host`.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Delimiter between the segments of a hierarchical configuration key.
pub const KEY_DELIMITER: &str = ":";

/// A configuration key compared without regard to case.
///
/// The original spelling is kept for display and iteration, but two keys that
/// differ only by case are equal and hash identically, so `Database:Host` and
/// `database:host` address the same entry.
///
/// # Examples
///
/// ```
/// use inicfg::domain::ConfigKey;
///
/// let key = ConfigKey::from("Database:Host");
/// assert_eq!(key, ConfigKey::from("database:host"));
/// assert_eq!(key.as_str(), "Database:Host");
/// ```
#[derive(Clone, Debug)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Joins path segments with [`KEY_DELIMITER`].
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::ConfigKey;
    ///
    /// let key = ConfigKey::combine(["db", "host"]);
    /// assert_eq!(key.as_str(), "db:host");
    /// ```
    pub fn combine<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut key = String::new();
        for (i, segment) in segments.into_iter().enumerate() {
            if i > 0 {
                key.push_str(KEY_DELIMITER);
            }
            key.push_str(segment.as_ref());
        }
        ConfigKey(key)
    }

    /// Returns the key as a string slice, in its original spelling.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if this key lives directly or indirectly under `section`.
    ///
    /// The comparison ignores case, like key equality.
    pub fn is_under(&self, section: &str) -> bool {
        let mut key = self.0.chars().flat_map(char::to_lowercase);
        let prefix = section
            .chars()
            .chain(KEY_DELIMITER.chars())
            .flat_map(char::to_lowercase);
        for expected in prefix {
            if key.next() != Some(expected) {
                return false;
            }
        }
        true
    }

    fn folded(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().flat_map(char::to_lowercase)
    }
}

impl PartialEq for ConfigKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded().eq(other.folded())
    }
}

impl Eq for ConfigKey {}

impl Hash for ConfigKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.folded() {
            c.hash(state);
        }
        // terminator, so that hash(a ++ b) differs from hash(a) ++ hash(b)
        0xffu8.hash(state);
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
