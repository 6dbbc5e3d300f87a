// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the errors that can occur while registering, loading and
//! reading INI configuration sources. All errors use `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use inicfg::domain::ConfigError;
///
/// fn register(path: &str) -> Result<(), ConfigError> {
///     if path.trim().is_empty() {
///         return Err(ConfigError::InvalidArgument {
///             parameter: "path".to_string(),
///             message: "File path must be a non-empty string.".to_string(),
///         });
///     }
///     Ok(())
/// }
///
/// assert!(register("  ").is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// An argument passed at registration time was rejected.
    #[error("Invalid argument '{parameter}': {message}")]
    InvalidArgument {
        /// The name of the offending parameter
        parameter: String,
        /// What was wrong with it
        message: String,
    },

    /// A required configuration file does not exist.
    #[error("The configuration file '{}' was not found and is not optional", path.display())]
    FileNotFound {
        /// The path as given to the source, relative to its file provider
        path: PathBuf,
    },

    /// Two parsed entries flattened to the same configuration key.
    #[error("An item with the same key has already been added: {key}")]
    DuplicateKey {
        /// The flattened key that collided, as spelled by the later entry
        key: String,
    },

    /// The requested configuration key was not found in any provider.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// An error occurred in a configuration source or file provider.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The parser rejected the configuration content.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The parser's own error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error occurred in a configuration watcher.
    #[error("Configuration watcher error: {message}")]
    WatcherError {
        /// The error message
        message: String,
        /// The underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a `SourceError` for a poisoned data lock.
    pub(crate) fn poisoned(source_name: &str) -> Self {
        ConfigError::SourceError {
            source_name: source_name.to_string(),
            message: "configuration data lock poisoned".to_string(),
            source: None,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
