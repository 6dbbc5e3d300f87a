// SPDX-License-Identifier: MIT OR Apache-2.0

//! File access abstraction.
//!
//! Configuration sources never touch the file system directly. They ask a
//! `FileProvider` for a readable stream, which lets tests and embedders serve
//! configuration from memory, archives or a sandboxed root.

use crate::domain::Result;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A readable configuration file stream.
pub type FileStream = Box<dyn Read + Send>;

/// A trait for opening configuration files by relative path.
///
/// # Examples
///
/// ```rust
/// use inicfg::domain::Result;
/// use inicfg::ports::{FileProvider, FileStream};
/// use std::io::Cursor;
/// use std::path::{Path, PathBuf};
///
/// #[derive(Debug)]
/// struct Fixed;
///
/// impl FileProvider for Fixed {
///     fn open(&self, path: &Path) -> Result<Option<FileStream>> {
///         if path == Path::new("app.ini") {
///             Ok(Some(Box::new(Cursor::new(b"[app]\nname=demo\n".to_vec()))))
///         } else {
///             Ok(None)
///         }
///     }
///
///     fn physical_path(&self, _path: &Path) -> Option<PathBuf> {
///         None
///     }
/// }
///
/// assert!(Fixed.open(Path::new("app.ini")).unwrap().is_some());
/// assert!(Fixed.open(Path::new("other.ini")).unwrap().is_none());
/// ```
pub trait FileProvider: fmt::Debug + Send + Sync {
    /// Opens the file at `path`, relative to the provider's root.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(stream))` - The file exists and was opened
    /// * `Ok(None)` - The file does not exist
    /// * `Err(ConfigError)` - The file exists but cannot be served
    fn open(&self, path: &Path) -> Result<Option<FileStream>>;

    /// Returns the on-disk location of `path`, if the provider is backed by a
    /// real file system. Used to attach change watchers.
    fn physical_path(&self, path: &Path) -> Option<PathBuf>;
}
