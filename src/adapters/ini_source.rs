// SPDX-License-Identifier: MIT OR Apache-2.0

//! Descriptor for one INI configuration file.

use crate::adapters::{IniConfigurationProvider, IniParser, PhysicalFileProvider};
use crate::domain::Result;
use crate::ports::{
    BuildContext, ConfigurationProvider, ConfigurationSource, FileProvider, SectionParser,
};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Default wait between a file change and the reload it triggers.
pub const DEFAULT_RELOAD_DELAY: Duration = Duration::from_millis(250);

/// Describes where an INI file lives and how it should be loaded.
///
/// A source is a plain record. It does no I/O until the host builds it into an
/// [`IniConfigurationProvider`] and loads that provider.
///
/// | Field              | Default                                            |
/// |--------------------|----------------------------------------------------|
/// | `path`             | empty (must be set)                                |
/// | `optional`         | `false`: a missing file is an error                |
/// | `reload_on_change` | `false`                                            |
/// | `reload_delay`     | [`DEFAULT_RELOAD_DELAY`]                           |
/// | `file_provider`    | the host's provider, else the host base path       |
/// | `parser`           | [`IniParser::new`]                                 |
///
/// # Examples
///
/// ```rust
/// use inicfg::adapters::IniConfigurationSource;
///
/// let mut source = IniConfigurationSource::new("conf/app.ini");
/// source.optional = true;
///
/// assert!(source.optional);
/// assert!(!source.reload_on_change);
/// ```
#[derive(Clone)]
pub struct IniConfigurationSource {
    /// Path of the file, relative to the file provider's root.
    pub path: PathBuf,
    /// Whether a missing file yields empty configuration instead of an error.
    pub optional: bool,
    /// Whether the host should reload the file when it changes on disk.
    pub reload_on_change: bool,
    /// Debounce applied to change notifications before reloading.
    pub reload_delay: Duration,
    /// File access abstraction; resolved from the host when `None`.
    pub file_provider: Option<Arc<dyn FileProvider>>,
    /// Grammar used to read the file; [`IniParser`] when `None`.
    pub parser: Option<Arc<dyn SectionParser>>,
}

impl IniConfigurationSource {
    /// Creates a source for a required, non-reloading file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Points absolute paths at their own directory.
    ///
    /// If no file provider is set and `path` is absolute, the provider becomes a
    /// [`PhysicalFileProvider`] rooted at the file's parent directory and `path`
    /// is reduced to the file name. Relative paths are left alone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inicfg::adapters::IniConfigurationSource;
    /// use std::path::Path;
    ///
    /// let mut source = IniConfigurationSource::new("/etc/myapp/app.ini");
    /// source.resolve_file_provider();
    ///
    /// assert_eq!(source.path, Path::new("app.ini"));
    /// assert!(source.file_provider.is_some());
    /// ```
    pub fn resolve_file_provider(&mut self) {
        if self.file_provider.is_some() || !self.path.is_absolute() {
            return;
        }
        if let (Some(parent), Some(file_name)) = (self.path.parent(), self.path.file_name()) {
            self.file_provider = Some(Arc::new(PhysicalFileProvider::new(parent)));
            self.path = PathBuf::from(file_name);
        }
    }

    /// Fills every unset collaborator from the host context.
    pub fn ensure_defaults(&mut self, ctx: &BuildContext) -> Result<()> {
        if self.file_provider.is_none() {
            let provider: Arc<dyn FileProvider> = match (ctx.file_provider(), ctx.base_path()) {
                (Some(provider), _) => Arc::clone(provider),
                (None, Some(base_path)) => Arc::new(PhysicalFileProvider::new(base_path)),
                (None, None) => Arc::new(PhysicalFileProvider::current_dir()?),
            };
            self.file_provider = Some(provider);
        }
        if self.parser.is_none() {
            self.parser = Some(Arc::new(IniParser::new()));
        }
        Ok(())
    }
}

impl Default for IniConfigurationSource {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            optional: false,
            reload_on_change: false,
            reload_delay: DEFAULT_RELOAD_DELAY,
            file_provider: None,
            parser: None,
        }
    }
}

impl fmt::Debug for IniConfigurationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IniConfigurationSource")
            .field("path", &self.path)
            .field("optional", &self.optional)
            .field("reload_on_change", &self.reload_on_change)
            .field("reload_delay", &self.reload_delay)
            .field("file_provider", &self.file_provider)
            .field("parser", &self.parser.as_ref().map(|_| "custom"))
            .finish()
    }
}

impl ConfigurationSource for IniConfigurationSource {
    fn name(&self) -> &str {
        "ini-file"
    }

    fn build(&self, ctx: &BuildContext) -> Result<Arc<dyn ConfigurationProvider>> {
        let mut resolved = self.clone();
        resolved.ensure_defaults(ctx)?;

        if let Some(parser) = &resolved.parser {
            if !parser.accepts(&resolved.path) {
                tracing::warn!(
                    "'{}' does not have an extension the parser expects ({}); reading it anyway",
                    resolved.path.display(),
                    parser.supported_extensions().join(", ")
                );
            }
        }

        Ok(Arc::new(IniConfigurationProvider::from_source(resolved)?))
    }
}
