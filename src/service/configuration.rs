// SPDX-License-Identifier: MIT OR Apache-2.0

//! The merged configuration view.
//!
//! A `Configuration` owns the providers produced by a
//! [`ConfigurationBuilder`](crate::service::ConfigurationBuilder) and answers
//! lookups across all of them. Providers registered later override providers
//! registered earlier.

use crate::domain::{ConfigError, ConfigKey, ConfigurationService, Result, KEY_DELIMITER};
use crate::ports::{ConfigWatcher, ConfigurationProvider};
use crate::service::ConfigurationBuilder;
use indexmap::IndexSet;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Merged, read-only view over a list of loaded providers.
///
/// # Examples
///
/// ```rust,no_run
/// use inicfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let config = Configuration::builder()
///     .set_base_path("/etc/myapp")
///     .add_ini_file("app.ini")?
///     .build()?;
///
/// let host = config.get("database:host")?;
/// let port = config.get_or_default("database:port", "5432");
/// # Ok(())
/// # }
/// ```
pub struct Configuration {
    /// Providers in registration order
    providers: Vec<Arc<dyn ConfigurationProvider>>,
    /// Watchers kept alive for the lifetime of the configuration
    watchers: Vec<Box<dyn ConfigWatcher>>,
}

impl Configuration {
    /// Creates a configuration over already-loaded providers.
    pub fn new(providers: Vec<Arc<dyn ConfigurationProvider>>) -> Self {
        Self {
            providers,
            watchers: Vec::new(),
        }
    }

    /// Creates a new configuration builder.
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Returns the providers in registration order.
    pub fn providers(&self) -> &[Arc<dyn ConfigurationProvider>] {
        &self.providers
    }

    /// Returns the number of registered watchers.
    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }

    /// Lists every key defined by any provider.
    ///
    /// Keys appear in the order they were first seen, walking providers in
    /// registration order. Keys differing only by case are listed once.
    pub fn keys(&self) -> Vec<ConfigKey> {
        let mut keys = IndexSet::new();
        for provider in &self.providers {
            keys.extend(provider.keys());
        }
        keys.into_iter().collect()
    }

    /// Returns the `(key, value)` pairs that live under `name`.
    ///
    /// Keys are relative to the section, so `database:host` is reported as
    /// `host` for the section `database`. Nested keys keep their remaining
    /// segments.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use inicfg::prelude::*;
    ///
    /// # fn main() -> Result<()> {
    /// let config = Configuration::builder().add_ini_file("app.ini")?.build()?;
    ///
    /// for (key, value) in config.section("database") {
    ///     println!("{key} = {value}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn section(&self, name: &str) -> Vec<(String, String)> {
        let depth = name.split(KEY_DELIMITER).count();
        self.keys()
            .into_iter()
            .filter(|key| key.is_under(name))
            .filter_map(|key| {
                let child = key.as_str().splitn(depth + 1, KEY_DELIMITER).nth(depth)?;
                let value = self.lookup(key.as_str())?;
                Some((child.to_string(), value))
            })
            .collect()
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.providers
            .iter()
            .rev()
            .find_map(|provider| provider.get(key))
    }

    /// Starts a file watcher for every provider that asks for one.
    ///
    /// Each change reloads the provider in place. Providers whose directory
    /// does not exist are skipped.
    #[cfg(feature = "reload")]
    pub(crate) fn watch_providers(&mut self) -> Result<()> {
        use crate::adapters::FileWatcher;

        self.attach_watchers(|path, delay| {
            Ok(Box::new(FileWatcher::new(path, delay)?) as Box<dyn ConfigWatcher>)
        })
    }

    /// Creates a watcher with `make` for every provider that has a watch path
    /// and wires its callback to reload that provider.
    ///
    /// A provider whose watcher cannot be created is skipped. Failing to start
    /// a created watcher is an error.
    #[cfg_attr(not(feature = "reload"), allow(dead_code))]
    pub(crate) fn attach_watchers<F>(&mut self, mut make: F) -> Result<()>
    where
        F: FnMut(&Path, Duration) -> Result<Box<dyn ConfigWatcher>>,
    {
        let targets: Vec<_> = self
            .providers
            .iter()
            .filter_map(|provider| {
                provider
                    .watch_path()
                    .map(|path| (path, Arc::clone(provider)))
            })
            .collect();

        for (path, provider) in targets {
            let mut watcher = match make(&path, provider.reload_delay()) {
                Ok(watcher) => watcher,
                Err(e) => {
                    tracing::debug!("Not watching '{}': {}", path.display(), e);
                    continue;
                }
            };

            watcher.watch(Arc::new(move |changed: &Path| match provider.load() {
                Ok(()) => tracing::info!(
                    "Reloaded '{}' from {}",
                    provider.name(),
                    changed.display()
                ),
                Err(e) => tracing::warn!(
                    "Failed to reload '{}' from {}: {}",
                    provider.name(),
                    changed.display(),
                    e
                ),
            }))?;

            self.register_watcher(watcher)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field(
                "providers",
                &self.providers.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .field("watchers", &self.watchers.len())
            .finish()
    }
}

impl ConfigurationService for Configuration {
    fn get(&self, key: &str) -> Result<String> {
        self.lookup(key)
            .ok_or_else(|| ConfigError::ConfigKeyNotFound {
                key: key.to_string(),
            })
    }

    fn reload(&mut self) -> Result<()> {
        let mut first_error = None;

        for provider in &self.providers {
            if let Err(e) = provider.load() {
                tracing::warn!("Failed to reload source '{}': {}", provider.name(), e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn register_watcher(&mut self, watcher: Box<dyn ConfigWatcher>) -> Result<()> {
        self.watchers.push(watcher);
        Ok(())
    }
}
