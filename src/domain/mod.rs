// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module holds the types every other layer speaks in: case-insensitive
//! keys, parsed sections, the flat key/value map and the error type. It has no
//! knowledge of files, parsers or watchers.

pub mod config_key;
pub mod errors;
pub mod flat_map;
pub mod section;
pub mod service;

// Re-export commonly used types
pub use config_key::{ConfigKey, KEY_DELIMITER};
pub use errors::{ConfigError, Result};
pub use flat_map::FlatConfigMap;
pub use section::Section;
pub use service::ConfigurationService;
