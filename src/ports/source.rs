// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source and provider traits.
//!
//! A `ConfigurationSource` is a descriptor registered on the builder: it says
//! where configuration comes from and how to read it. When the builder is
//! built, each source turns into a `ConfigurationProvider`, which owns the
//! loaded flat key/value data.

use crate::domain::{ConfigKey, Result};
use crate::ports::FileProvider;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Host-level defaults handed to every source at build time.
///
/// Sources that leave their file provider unset fall back to
/// [`BuildContext::file_provider`], and failing that to a physical provider
/// rooted at [`BuildContext::base_path`].
#[derive(Clone, Debug, Default)]
pub struct BuildContext {
    base_path: Option<PathBuf>,
    file_provider: Option<Arc<dyn FileProvider>>,
}

impl BuildContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory relative paths are resolved against.
    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// Sets the file provider used by sources that do not bring their own.
    pub fn with_file_provider(mut self, provider: Arc<dyn FileProvider>) -> Self {
        self.file_provider = Some(provider);
        self
    }

    /// Returns the base path, if one was set.
    pub fn base_path(&self) -> Option<&Path> {
        self.base_path.as_deref()
    }

    /// Returns the default file provider, if one was set.
    pub fn file_provider(&self) -> Option<&Arc<dyn FileProvider>> {
        self.file_provider.as_ref()
    }
}

/// A descriptor for one configuration source.
///
/// # Examples
///
/// ```rust
/// use inicfg::domain::{ConfigKey, Result};
/// use inicfg::ports::{BuildContext, ConfigurationProvider, ConfigurationSource};
/// use std::sync::Arc;
///
/// struct Empty;
///
/// impl ConfigurationProvider for Empty {
///     fn name(&self) -> &str { "empty" }
///     fn load(&self) -> Result<()> { Ok(()) }
///     fn get(&self, _key: &str) -> Option<String> { None }
///     fn keys(&self) -> Vec<ConfigKey> { Vec::new() }
/// }
///
/// struct EmptySource;
///
/// impl ConfigurationSource for EmptySource {
///     fn name(&self) -> &str { "empty" }
///     fn build(&self, _ctx: &BuildContext) -> Result<Arc<dyn ConfigurationProvider>> {
///         Ok(Arc::new(Empty))
///     }
/// }
///
/// let provider = EmptySource.build(&BuildContext::new()).unwrap();
/// provider.load().unwrap();
/// assert!(provider.keys().is_empty());
/// ```
pub trait ConfigurationSource: Send + Sync {
    /// Short identifier used in logs and errors, e.g. `"ini-file"`.
    fn name(&self) -> &str;

    /// Applies host defaults and creates the provider for this source.
    ///
    /// Building does not load any data; the host calls
    /// [`ConfigurationProvider::load`] afterwards.
    fn build(&self, ctx: &BuildContext) -> Result<Arc<dyn ConfigurationProvider>>;
}

/// A loaded (or loadable) set of flat configuration values.
///
/// Providers use interior mutability so that a reload triggered from a watcher
/// thread can replace the data while the host keeps reading it.
pub trait ConfigurationProvider: Send + Sync {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &str;

    /// (Re)loads the data from the backing store, replacing what was there.
    ///
    /// On error the previously loaded data is kept.
    fn load(&self) -> Result<()>;

    /// Looks up a flattened key, ignoring case.
    fn get(&self, key: &str) -> Option<String>;

    /// Lists all keys currently loaded, in load order.
    fn keys(&self) -> Vec<ConfigKey>;

    /// The on-disk file to watch, when this provider wants change-driven reloads.
    fn watch_path(&self) -> Option<PathBuf> {
        None
    }

    /// How long to wait after a change before reloading.
    fn reload_delay(&self) -> Duration {
        Duration::from_millis(250)
    }
}
