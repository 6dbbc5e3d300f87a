// SPDX-License-Identifier: MIT OR Apache-2.0

//! The flat key/value map handed from providers to the configuration host.

use crate::domain::{ConfigError, ConfigKey, Result};
use indexmap::IndexMap;

/// An insertion-ordered map from case-insensitive keys to string values.
///
/// Keys are unique: inserting a key that is already present (ignoring case)
/// is an error rather than an overwrite.
///
/// # Examples
///
/// ```
/// use inicfg::domain::FlatConfigMap;
///
/// let mut map = FlatConfigMap::new();
/// map.try_insert("Section:Key", "value").unwrap();
///
/// assert_eq!(map.get("section:key"), Some("value"));
/// assert!(map.try_insert("SECTION:KEY", "other").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlatConfigMap {
    entries: IndexMap<ConfigKey, String>,
}

impl FlatConfigMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new entry.
    ///
    /// Returns [`ConfigError::DuplicateKey`] if an equal key is already present.
    /// The error carries the key as spelled by this call, and the existing
    /// entry is left untouched.
    pub fn try_insert(&mut self, key: impl Into<ConfigKey>, value: impl Into<String>) -> Result<()> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(ConfigError::DuplicateKey {
                key: key.into_string(),
            });
        }
        self.entries.insert(key, value.into());
        Ok(())
    }

    /// Looks up a value, ignoring case.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&ConfigKey::from(key)).map(String::as_str)
    }

    /// Returns `true` if the key is present, ignoring case.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&ConfigKey::from(key))
    }

    /// Iterates the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &ConfigKey> {
        self.entries.keys()
    }

    /// Iterates the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ConfigKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
