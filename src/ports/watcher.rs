// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration watcher trait definition.
//!
//! This module defines the `ConfigWatcher` trait, which provides an interface for
//! watching configuration files for changes and triggering callbacks when changes occur.

use crate::domain::Result;
use std::path::Path;
use std::sync::Arc;

/// Type alias for change notification callbacks.
///
/// This callback is invoked when a watched file changes. It receives the path
/// of the file that changed.
pub type ChangeCallback = Arc<dyn Fn(&Path) + Send + Sync>;

/// A trait for watching configuration files for changes.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded contexts.
/// Callbacks run on the watcher's own thread.
///
/// # Examples
///
/// ```rust
/// use inicfg::ports::{ChangeCallback, ConfigWatcher};
/// use inicfg::domain::Result;
///
/// struct MyWatcher;
///
/// impl ConfigWatcher for MyWatcher {
///     fn watch(&mut self, callback: ChangeCallback) -> Result<()> {
///         // Implementation here
///         Ok(())
///     }
///
///     fn stop(&mut self) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait ConfigWatcher: Send + Sync {
    /// Starts watching for changes.
    ///
    /// When a change is detected, the provided callback will be invoked with the
    /// path that changed. The callback should be non-blocking to avoid delaying
    /// the watcher.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The watcher was successfully started
    /// * `Err(ConfigError)` - An error occurred while starting the watcher
    fn watch(&mut self, callback: ChangeCallback) -> Result<()>;

    /// Stops watching for changes.
    ///
    /// After calling this method, no more change notifications will be sent.
    fn stop(&mut self) -> Result<()>;
}
