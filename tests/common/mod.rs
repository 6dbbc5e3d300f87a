// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

#![allow(dead_code)]

use inicfg::domain::{ConfigError, Result, Section};
use inicfg::ports::{FileProvider, FileStream, SectionParser};
use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory file provider whose contents can be changed between loads.
#[derive(Debug, Default)]
pub struct MemoryFileProvider {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryFileProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_file(self: Arc<Self>, path: &str, content: &str) -> Arc<Self> {
        self.write(path, content);
        self
    }

    pub fn write(&self, path: &str, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
    }

    pub fn remove(&self, path: &str) {
        self.files.lock().unwrap().remove(Path::new(path));
    }
}

impl FileProvider for MemoryFileProvider {
    fn open(&self, path: &Path) -> Result<Option<FileStream>> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .get(path)
            .map(|content| Box::new(Cursor::new(content.clone().into_bytes())) as FileStream))
    }

    fn physical_path(&self, _path: &Path) -> Option<PathBuf> {
        None
    }
}

/// Parser stub that returns a fixed set of sections regardless of input.
pub struct StubParser {
    sections: Vec<Section>,
}

impl StubParser {
    pub fn new(sections: Vec<Section>) -> Arc<Self> {
        Arc::new(Self { sections })
    }
}

impl SectionParser for StubParser {
    fn parse(&self, _content: &str) -> Result<Vec<Section>> {
        Ok(self.sections.clone())
    }

    fn supported_extensions(&self) -> &[&str] {
        &["stub"]
    }
}

/// Parser stub that always rejects its input.
pub struct RejectingParser;

impl SectionParser for RejectingParser {
    fn parse(&self, _content: &str) -> Result<Vec<Section>> {
        Err(ConfigError::ParseError {
            message: "rejected".to_string(),
            source: None,
        })
    }
}
