// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! This module defines the `ConfigurationService` trait, the read side of the
//! configuration host. It merges the flat maps of every loaded provider into a
//! single view and manages reloading.

use crate::domain::Result;
use crate::ports::ConfigWatcher;

/// The merged, read-only view over all loaded configuration providers.
///
/// Keys are flattened hierarchical keys such as `database:host` and are looked
/// up without regard to case.
///
/// # Examples
///
/// ```rust
/// use inicfg::domain::{ConfigError, ConfigurationService, Result};
/// use inicfg::ports::ConfigWatcher;
///
/// struct Fixed;
///
/// impl ConfigurationService for Fixed {
///     fn get(&self, key: &str) -> Result<String> {
///         if key.eq_ignore_ascii_case("db:host") {
///             Ok("localhost".to_string())
///         } else {
///             Err(ConfigError::ConfigKeyNotFound { key: key.to_string() })
///         }
///     }
///
///     fn reload(&mut self) -> Result<()> {
///         Ok(())
///     }
///
///     fn register_watcher(&mut self, _watcher: Box<dyn ConfigWatcher>) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let service = Fixed;
/// assert_eq!(service.get("DB:HOST").unwrap(), "localhost");
/// assert_eq!(service.get_or_default("db:port", "5432"), "5432");
/// assert!(!service.has("db:port"));
/// ```
pub trait ConfigurationService {
    /// Retrieves the value for a flattened key.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The value from the last provider that defines the key
    /// * `Err(ConfigError::ConfigKeyNotFound)` - No provider defines the key
    fn get(&self, key: &str) -> Result<String>;

    /// Retrieves a value or returns `default` when the key is absent.
    fn get_or_default(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|_| default.to_string())
    }

    /// Checks whether any provider defines the key.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Reloads every provider from its backing file.
    fn reload(&mut self) -> Result<()>;

    /// Keeps a watcher alive for the lifetime of the service.
    fn register_watcher(&mut self, watcher: Box<dyn ConfigWatcher>) -> Result<()>;
}
