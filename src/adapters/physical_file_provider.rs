// SPDX-License-Identifier: MIT OR Apache-2.0

//! File provider backed by a directory on the local file system.

use crate::domain::{ConfigError, Result};
use crate::ports::{FileProvider, FileStream};
use directories::ProjectDirs;
use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

/// Maximum allowed size for configuration files (10MB)
/// This prevents denial of service attacks via extremely large files
const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

const SOURCE_NAME: &str = "physical-file";

/// Serves files from beneath a root directory.
///
/// Paths handed to [`FileProvider::open`] are resolved relative to the root.
/// Absolute paths and paths that climb out of the root with `..` are never
/// served; they are reported as missing files.
///
/// # Examples
///
/// ```rust,no_run
/// use inicfg::adapters::PhysicalFileProvider;
/// use inicfg::ports::FileProvider;
/// use std::path::Path;
///
/// let provider = PhysicalFileProvider::new("/etc/myapp");
/// let stream = provider.open(Path::new("app.ini")).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct PhysicalFileProvider {
    root: PathBuf,
}

impl PhysicalFileProvider {
    /// Creates a provider rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a provider rooted at the current working directory.
    pub fn current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Creates a provider rooted at the OS-appropriate configuration directory
    /// for an application.
    ///
    /// This method uses the `directories` crate, so on Linux it resolves to
    /// `$XDG_CONFIG_HOME/<application>`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use inicfg::adapters::PhysicalFileProvider;
    ///
    /// let provider = PhysicalFileProvider::for_project("com", "example", "myapp").unwrap();
    /// ```
    pub fn for_project(qualifier: &str, organization: &str, application: &str) -> Result<Self> {
        let proj_dirs = ProjectDirs::from(qualifier, organization, application).ok_or_else(|| {
            ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            }
        })?;

        Ok(Self::new(proj_dirs.config_dir()))
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> Option<PathBuf> {
        let escapes = path.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        (!escapes).then(|| self.root.join(path))
    }
}

impl FileProvider for PhysicalFileProvider {
    fn open(&self, path: &Path) -> Result<Option<FileStream>> {
        let Some(full_path) = self.resolve(path) else {
            tracing::debug!("Path outside the provider root: {}", path.display());
            return Ok(None);
        };

        // Check file size before reading to prevent DoS via large files
        let metadata = match fs::metadata(&full_path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ConfigError::SourceError {
                    source_name: SOURCE_NAME.to_string(),
                    message: format!("Failed to read file metadata: {}", path.display()),
                    source: Some(Box::new(e)),
                })
            }
        };

        if !metadata.is_file() {
            return Ok(None);
        }

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_CONFIG_FILE_SIZE
                ),
                source: None,
            });
        }

        match File::open(&full_path) {
            Ok(file) => Ok(Some(Box::new(file) as FileStream)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: format!("Failed to open configuration file: {}", path.display()),
                source: Some(Box::new(e)),
            }),
        }
    }

    fn physical_path(&self, path: &Path) -> Option<PathBuf> {
        self.resolve(path)
    }
}
