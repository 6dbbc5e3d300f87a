// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registration helpers that attach INI files to a [`ConfigurationBuilder`].

use crate::adapters::IniConfigurationSource;
use crate::domain::{ConfigError, Result};
use crate::ports::FileProvider;
use crate::service::ConfigurationBuilder;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Options for registering one INI file.
///
/// | Field              | Default                                      |
/// |--------------------|----------------------------------------------|
/// | `path`             | required                                     |
/// | `optional`         | `false`                                      |
/// | `reload_on_change` | `false`                                      |
/// | `file_provider`    | `None`: absolute paths get their own, relative paths use the host's |
///
/// # Examples
///
/// ```rust
/// use inicfg::service::IniFileOptions;
///
/// let options = IniFileOptions::new("app.ini")
///     .optional(true)
///     .reload_on_change(true);
///
/// assert!(options.optional);
/// assert!(options.reload_on_change);
/// ```
#[derive(Clone)]
pub struct IniFileOptions {
    /// Path of the file, relative to the file provider or absolute.
    pub path: PathBuf,
    /// Whether a missing file is allowed.
    pub optional: bool,
    /// Whether the file is reloaded when it changes.
    pub reload_on_change: bool,
    /// File provider used to open the file.
    pub file_provider: Option<Arc<dyn FileProvider>>,
}

impl IniFileOptions {
    /// Creates options for a required, non-reloading file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            optional: false,
            reload_on_change: false,
            file_provider: None,
        }
    }

    /// Sets whether the file is optional.
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Sets whether the file is reloaded on change.
    pub fn reload_on_change(mut self, reload_on_change: bool) -> Self {
        self.reload_on_change = reload_on_change;
        self
    }

    /// Sets the file provider.
    pub fn file_provider(mut self, provider: Arc<dyn FileProvider>) -> Self {
        self.file_provider = Some(provider);
        self
    }
}

impl fmt::Debug for IniFileOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IniFileOptions")
            .field("path", &self.path)
            .field("optional", &self.optional)
            .field("reload_on_change", &self.reload_on_change)
            .field("file_provider", &self.file_provider)
            .finish()
    }
}

/// Extension methods for registering INI files on a [`ConfigurationBuilder`].
///
/// Each method adds exactly one [`IniConfigurationSource`] and hands the
/// builder back for chaining.
///
/// # Examples
///
/// ```rust,no_run
/// use inicfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let config = ConfigurationBuilder::new()
///     .add_ini_file("app.ini")?
///     .add_ini_file_with(IniFileOptions::new("local.ini").optional(true))?
///     .add_ini_source(|source| {
///         source.path = "/etc/myapp/override.ini".into();
///         source.optional = true;
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub trait IniConfigurationExt: Sized {
    /// Adds a required INI file that is not reloaded on change.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidArgument` if `path` is empty or whitespace.
    fn add_ini_file(self, path: impl Into<PathBuf>) -> Result<Self> {
        self.add_ini_file_with(IniFileOptions::new(path))
    }

    /// Adds an INI file described by `options`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidArgument` if the path is empty or whitespace.
    fn add_ini_file_with(self, options: IniFileOptions) -> Result<Self>;

    /// Adds an INI source configured by `configure`.
    ///
    /// The callback receives a source with default settings. Its path is not
    /// validated here; an empty path surfaces when the builder loads it.
    fn add_ini_source<F>(self, configure: F) -> Self
    where
        F: FnOnce(&mut IniConfigurationSource);
}

impl IniConfigurationExt for ConfigurationBuilder {
    fn add_ini_file_with(self, options: IniFileOptions) -> Result<Self> {
        let blank = options
            .path
            .to_str()
            .map(|path| path.trim().is_empty())
            .unwrap_or(false);
        if blank {
            return Err(ConfigError::InvalidArgument {
                parameter: "path".to_string(),
                message: "File path must be a non-empty string.".to_string(),
            });
        }

        Ok(self.add_ini_source(|source| {
            source.path = options.path;
            source.optional = options.optional;
            source.reload_on_change = options.reload_on_change;
            source.file_provider = options.file_provider;
            source.resolve_file_provider();
        }))
    }

    fn add_ini_source<F>(self, configure: F) -> Self
    where
        F: FnOnce(&mut IniConfigurationSource),
    {
        let mut source = IniConfigurationSource::default();
        configure(&mut source);
        self.with_source(Box::new(source))
    }
}
