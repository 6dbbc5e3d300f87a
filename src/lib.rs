// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI file support for a hexagonal configuration host.
//!
//! This crate reads INI files into a flat, case-insensitive key/value view.
//! Every `key = value` line inside a `[section]` becomes the entry
//! `section:key`; keys that appear before the first section header keep their
//! bare name.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `Section`, `FlatConfigMap`, errors)
//! - **Ports**: Trait definitions (`SectionParser`, `FileProvider`, `ConfigurationSource`,
//!   `ConfigurationProvider`, `ConfigWatcher`)
//! - **Adapters**: The INI parser, the physical file provider, the INI source and
//!   provider, and the file watcher
//! - **Service**: The builder and the merged configuration view
//!
//! # Features
//!
//! - **Flattening**: `[database] host = localhost` is read as `database:host`
//! - **Case-insensitive lookup**: `Database:Host` and `database:host` are the same key
//! - **Strict duplicates**: two entries flattening to the same key fail the load
//! - **Optional files**: a missing optional file yields empty configuration
//! - **Precedence**: files registered later override earlier ones
//! - **Dynamic Reloading**: watch files and reload them when they change
//!
//! # Feature Flags
//!
//! - `reload`: Enable dynamic reloading with file watching
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use inicfg::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigurationBuilder::new()
//!     .set_base_path("/etc/myapp")
//!     .add_ini_file("app.ini")?
//!     .add_ini_file_with(IniFileOptions::new("local.ini").optional(true))?
//!     .build()?;
//!
//! let host = config.get("database:host")?;
//! println!("database host: {host}");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{IniConfigurationSource, IniParser, PhysicalFileProvider};
    pub use crate::domain::{ConfigError, ConfigKey, ConfigurationService, Result};
    pub use crate::ports::{ConfigWatcher, ConfigurationProvider, ConfigurationSource};
    pub use crate::service::{
        Configuration, ConfigurationBuilder, IniConfigurationExt, IniFileOptions,
    };

    #[cfg(feature = "reload")]
    pub use crate::adapters::FileWatcher;
}
