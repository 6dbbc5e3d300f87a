// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration host.
//!
//! This module contains the builder that registers sources, the merged
//! `Configuration` view that implements `ConfigurationService`, and the
//! registration helpers for INI files.

pub mod builder;
pub mod configuration;
pub mod extensions;

// Re-export commonly used types
pub use builder::ConfigurationBuilder;
pub use configuration::Configuration;
pub use extensions::{IniConfigurationExt, IniFileOptions};
