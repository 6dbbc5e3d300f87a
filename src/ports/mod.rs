// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that separate the INI
//! provider from its collaborators: the grammar parser, file access, the
//! configuration host and change watching. Adapters implement these traits.

pub mod file_provider;
pub mod parser;
pub mod source;
pub mod watcher;

// Re-export commonly used types
pub use file_provider::{FileProvider, FileStream};
pub use parser::SectionParser;
pub use source::{BuildContext, ConfigurationProvider, ConfigurationSource};
pub use watcher::{ChangeCallback, ConfigWatcher};
