// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing the INI implementations of the ports.
//!
//! The parser turns INI text into sections, the physical file provider reads
//! files from disk, and the source/provider pair plugs INI files into the
//! configuration host. The file watcher is available with the `reload` feature.

pub mod ini_parser;
pub mod ini_provider;
pub mod ini_source;
pub mod physical_file_provider;

pub mod watchers;

// Re-export commonly used types
pub use ini_parser::IniParser;
pub use ini_provider::IniConfigurationProvider;
pub use ini_source::{IniConfigurationSource, DEFAULT_RELOAD_DELAY};
pub use physical_file_provider::PhysicalFileProvider;
#[cfg(feature = "reload")]
pub use watchers::FileWatcher;
