// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI section parser backed by the `rust-ini` crate.

use crate::domain::{ConfigError, Result, Section};
use crate::ports::SectionParser;
use ini::{Ini, ParseOption};

const SUPPORTED_EXTENSIONS: &[&str] = &["ini", "cnf", "conf", "cfg"];

/// INI parser implementation.
///
/// Reports every section and key in file order. Repeated sections and repeated
/// keys are passed through untouched. Keys that precede the first section header
/// are reported in a root section; an empty root section is omitted.
///
/// # Examples
///
/// ```rust
/// use inicfg::adapters::IniParser;
/// use inicfg::ports::SectionParser;
///
/// let parser = IniParser::new();
/// let sections = parser.parse("[database]\nhost = localhost\nport = 5432").unwrap();
///
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].name(), Some("database"));
/// assert_eq!(sections[0].entries().next(), Some(("host", "localhost")));
/// ```
#[derive(Debug, Clone)]
pub struct IniParser {
    enabled_quote: bool,
    enabled_escape: bool,
}

impl IniParser {
    /// Creates a parser with quote and escape handling enabled.
    pub fn new() -> Self {
        Self {
            enabled_quote: true,
            enabled_escape: true,
        }
    }

    /// Enables or disables stripping of surrounding quotes from values.
    pub fn with_quotes(mut self, enabled: bool) -> Self {
        self.enabled_quote = enabled;
        self
    }

    /// Enables or disables backslash escape sequences in values.
    pub fn with_escapes(mut self, enabled: bool) -> Self {
        self.enabled_escape = enabled;
        self
    }

    fn parse_option(&self) -> ParseOption {
        ParseOption {
            enabled_quote: self.enabled_quote,
            enabled_escape: self.enabled_escape,
            ..ParseOption::default()
        }
    }
}

impl Default for IniParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionParser for IniParser {
    fn parse(&self, content: &str) -> Result<Vec<Section>> {
        let ini = Ini::load_from_str_opt(content, self.parse_option()).map_err(|e| {
            ConfigError::ParseError {
                message: e.to_string(),
                source: Some(Box::new(e)),
            }
        })?;

        let mut sections = Vec::new();
        for (name, properties) in ini.iter() {
            let mut section = match name {
                Some(name) => Section::named(name),
                None => Section::root(),
            };
            for (key, value) in properties.iter() {
                section.push(key, value);
            }
            if section.name().is_none() && section.is_empty() {
                continue;
            }
            sections.push(section);
        }
        Ok(sections)
    }

    fn supported_extensions(&self) -> &[&str] {
        SUPPORTED_EXTENSIONS
    }
}
