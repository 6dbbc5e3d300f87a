// SPDX-License-Identifier: MIT OR Apache-2.0

//! Section parser trait definition.
//!
//! This module defines the `SectionParser` trait, the seam between the INI
//! provider and whatever library actually understands the file grammar.

use crate::domain::{Result, Section};
use std::path::Path;

/// A trait for turning configuration text into ordered sections.
///
/// Implementations own the grammar entirely: comments, quoting, escaping and
/// the handling of repeated sections or keys. The returned sections and their
/// entries must be in file order; repeated entries are reported as they are
/// so that the caller can decide what a collision means.
///
/// # Examples
///
/// ```rust
/// use inicfg::domain::{Result, Section};
/// use inicfg::ports::SectionParser;
///
/// struct OneLineParser;
///
/// impl SectionParser for OneLineParser {
///     fn parse(&self, content: &str) -> Result<Vec<Section>> {
///         let mut section = Section::named("main");
///         if let Some((k, v)) = content.split_once('=') {
///             section.push(k.trim(), v.trim());
///         }
///         Ok(vec![section])
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["line"]
///     }
/// }
///
/// let sections = OneLineParser.parse("answer = 42").unwrap();
/// assert_eq!(sections[0].entries().next(), Some(("answer", "42")));
/// ```
pub trait SectionParser: Send + Sync {
    /// Parses configuration content into sections.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Section>)` - Sections in file order
    /// * `Err(ConfigError::ParseError)` - The content is not valid for this grammar
    fn parse(&self, content: &str) -> Result<Vec<Section>>;

    /// Returns the file extensions (without the leading dot) this parser reads.
    ///
    /// An empty list means the parser does not care about file names.
    fn supported_extensions(&self) -> &[&str] {
        &[]
    }

    /// Returns `true` if `path` has one of the supported extensions.
    ///
    /// Extensions compare without regard to ASCII case. A parser with no
    /// supported extensions accepts every path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inicfg::adapters::IniParser;
    /// use inicfg::ports::SectionParser;
    /// use std::path::Path;
    ///
    /// let parser = IniParser::new();
    /// assert!(parser.accepts(Path::new("/etc/my.CNF")));
    /// assert!(!parser.accepts(Path::new("config.yaml")));
    /// ```
    fn accepts(&self, path: &Path) -> bool {
        let supported = self.supported_extensions();
        if supported.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| supported.iter().any(|s| s.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}
