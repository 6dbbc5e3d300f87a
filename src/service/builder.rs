// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builder for the configuration host.

use crate::adapters::PhysicalFileProvider;
use crate::domain::Result;
use crate::ports::{BuildContext, ConfigurationSource, FileProvider};
use crate::service::Configuration;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Collects configuration sources and host defaults, then loads them.
///
/// Sources are kept in registration order. When the same key is defined by
/// several sources, the one registered last wins.
///
/// # Examples
///
/// ```rust
/// use inicfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let config = ConfigurationBuilder::new()
///     .add_ini_file_with(IniFileOptions::new("missing.ini").optional(true))?
///     .build()?;
///
/// assert!(config.keys().is_empty());
/// # Ok(())
/// # }
/// ```
pub struct ConfigurationBuilder {
    sources: Vec<Box<dyn ConfigurationSource>>,
    context: BuildContext,
}

impl ConfigurationBuilder {
    /// Creates a new builder with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            context: BuildContext::new(),
        }
    }

    /// Adds a configuration source to the builder.
    pub fn with_source(mut self, source: Box<dyn ConfigurationSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Sets the directory that relative file paths are resolved against.
    ///
    /// Without a base path, files are resolved against the current working
    /// directory at build time.
    pub fn set_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.context = self.context.with_base_path(base_path);
        self
    }

    /// Sets the file provider used by sources that do not bring their own.
    pub fn set_file_provider(mut self, provider: Arc<dyn FileProvider>) -> Self {
        self.context = self.context.with_file_provider(provider);
        self
    }

    /// Resolves relative file paths against the OS configuration directory of
    /// an application, e.g. `$XDG_CONFIG_HOME/myapp` on Linux.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SourceError` if no home directory can be found.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use inicfg::prelude::*;
    ///
    /// # fn main() -> Result<()> {
    /// let config = ConfigurationBuilder::new()
    ///     .set_project_config_dir("com", "example", "myapp")?
    ///     .add_ini_file_with(IniFileOptions::new("myapp.ini").optional(true))?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn set_project_config_dir(
        self,
        qualifier: &str,
        organization: &str,
        application: &str,
    ) -> Result<Self> {
        let provider = PhysicalFileProvider::for_project(qualifier, organization, application)?;
        Ok(self.set_file_provider(Arc::new(provider)))
    }

    /// Returns the registered sources in registration order.
    pub fn sources(&self) -> &[Box<dyn ConfigurationSource>] {
        &self.sources
    }

    /// Returns the host defaults handed to each source.
    pub fn context(&self) -> &BuildContext {
        &self.context
    }

    /// Builds every source into a provider, loads it and returns the merged view.
    ///
    /// With the `reload` feature, providers that asked for change-driven
    /// reloads are watched for as long as the returned configuration lives.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while building or loading a source.
    pub fn build(self) -> Result<Configuration> {
        let mut providers = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            let provider = source.build(&self.context)?;
            provider.load()?;
            tracing::debug!("Loaded configuration source '{}'", source.name());
            providers.push(provider);
        }

        #[allow(unused_mut)]
        let mut configuration = Configuration::new(providers);

        #[cfg(feature = "reload")]
        configuration.watch_providers()?;

        Ok(configuration)
    }
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigurationBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationBuilder")
            .field(
                "sources",
                &self.sources.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .field("context", &self.context)
            .finish()
    }
}
