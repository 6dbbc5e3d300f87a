// SPDX-License-Identifier: MIT OR Apache-2.0

//! File system watcher for configuration file changes.
//!
//! This module provides a watcher that monitors a configuration file and invokes
//! a callback once the file has been quiet for the configured delay.

use crate::domain::{ConfigError, Result};
use crate::ports::{ChangeCallback, ConfigWatcher};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How often the watcher thread checks for a stop request.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// File system watcher for a single configuration file.
///
/// The watcher observes the file's parent directory, filters events down to
/// the file itself and fires the callback after `delay` has passed without any
/// further change, so a burst of writes produces a single reload.
///
/// # Examples
///
/// ```rust,no_run
/// use inicfg::adapters::FileWatcher;
/// use inicfg::ports::ConfigWatcher;
/// use std::path::Path;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # fn main() -> inicfg::domain::Result<()> {
/// let mut watcher = FileWatcher::new("/etc/myapp/app.ini", Duration::from_millis(250))?;
///
/// watcher.watch(Arc::new(|path: &Path| {
///     println!("Configuration changed: {}", path.display());
/// }))?;
///
/// // Later, stop watching
/// watcher.stop()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FileWatcher {
    /// Path to the file being watched
    file_path: PathBuf,
    /// Quiet period required before the callback fires
    delay: Duration,
    /// Internal watcher
    watcher: Option<RecommendedWatcher>,
    /// Thread handle for the dispatch thread
    watch_thread: Option<JoinHandle<()>>,
    /// Stop signal sender
    stop_tx: Option<Sender<()>>,
}

impl FileWatcher {
    /// Creates a new file watcher for the given path.
    ///
    /// The parent directory must exist; the file itself may be created later.
    pub fn new(path: impl AsRef<Path>, delay: Duration) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();

        let parent_exists = file_path.parent().map(Path::is_dir).unwrap_or(false);
        if !parent_exists {
            return Err(ConfigError::WatcherError {
                message: format!("Directory does not exist for: {}", file_path.display()),
                source: None,
            });
        }

        Ok(Self {
            file_path,
            delay,
            watcher: None,
            watch_thread: None,
            stop_tx: None,
        })
    }

    /// Returns the watched file path.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn dispatch(
        file_path: PathBuf,
        delay: Duration,
        events: Receiver<notify::Result<Event>>,
        stop_rx: Receiver<()>,
        callback: ChangeCallback,
    ) {
        let mut pending: Option<Instant> = None;

        loop {
            if stop_rx.try_recv().is_ok() {
                break;
            }

            match events.recv_timeout(POLL_INTERVAL) {
                Ok(Ok(event)) => {
                    if event.paths.iter().any(|p| p == &file_path) {
                        pending = Some(Instant::now() + delay);
                    }
                }
                Ok(Err(e)) => tracing::warn!("File watcher error for '{}': {}", file_path.display(), e),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            if let Some(deadline) = pending {
                if Instant::now() >= deadline {
                    pending = None;
                    tracing::info!("Configuration file changed: {}", file_path.display());
                    callback(&file_path);
                }
            }
        }
    }
}

impl ConfigWatcher for FileWatcher {
    fn watch(&mut self, callback: ChangeCallback) -> Result<()> {
        if self.watcher.is_some() {
            return Err(ConfigError::WatcherError {
                message: "Watcher is already running".to_string(),
                source: None,
            });
        }

        let (event_tx, event_rx) = channel();
        let (stop_tx, stop_rx) = channel::<()>();

        let mut watcher =
            RecommendedWatcher::new(event_tx, notify::Config::default()).map_err(|e| {
                ConfigError::WatcherError {
                    message: format!("Failed to create file watcher: {}", e),
                    source: Some(Box::new(e)),
                }
            })?;

        // Watch the parent directory; editors often replace the file instead of writing it
        let watch_dir = self
            .file_path
            .parent()
            .ok_or_else(|| ConfigError::WatcherError {
                message: "Failed to get parent directory".to_string(),
                source: None,
            })?
            .to_path_buf();

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| ConfigError::WatcherError {
                message: format!("Failed to start watching: {}", e),
                source: Some(Box::new(e)),
            })?;

        let file_path = self.file_path.clone();
        let delay = self.delay;
        let watch_thread =
            thread::spawn(move || Self::dispatch(file_path, delay, event_rx, stop_rx, callback));

        self.watcher = Some(watcher);
        self.stop_tx = Some(stop_tx);
        self.watch_thread = Some(watch_thread);

        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }

        if let Some(handle) = self.watch_thread.take() {
            handle.join().map_err(|_| ConfigError::WatcherError {
                message: "Failed to join watcher thread".to_string(),
                source: None,
            })?;
        }

        self.watcher = None;

        Ok(())
    }
}

impl Drop for FileWatcher {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}
