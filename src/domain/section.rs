// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsed INI sections.

/// A named group of key/value pairs, in the order the parser reported them.
///
/// Keys that appear before the first section header belong to the root
/// section, whose `name` is `None`.
///
/// # Examples
///
/// ```
/// use inicfg::domain::Section;
///
/// let section = Section::named("db")
///     .with_entry("host", "localhost")
///     .with_entry("port", "5432");
///
/// assert_eq!(section.name(), Some("db"));
/// assert_eq!(section.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Section {
    name: Option<String>,
    entries: Vec<(String, String)>,
}

impl Section {
    /// Creates an empty section with the given header name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            entries: Vec::new(),
        }
    }

    /// Creates an empty root section for keys outside any header.
    pub fn root() -> Self {
        Self::default()
    }

    /// Appends a key/value pair and returns the section.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Appends a key/value pair. Repeated keys are kept as separate entries.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Returns the section header, or `None` for the root section.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Iterates the entries in parser order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries, counting repeats.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the section holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
