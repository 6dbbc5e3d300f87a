// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI configuration provider.
//!
//! This module turns parsed INI sections into the flat, case-insensitive
//! `section:key` map the configuration host reads from.

use crate::adapters::ini_source::DEFAULT_RELOAD_DELAY;
use crate::adapters::IniConfigurationSource;
use crate::domain::{ConfigError, ConfigKey, FlatConfigMap, Result, Section};
use crate::ports::{ConfigurationProvider, FileProvider, SectionParser};
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::Duration;

const SOURCE_NAME: &str = "ini-file";

/// Provider holding the flattened contents of one INI file.
///
/// Cloning is cheap and clones share the loaded data, so a clone handed to a
/// change watcher reloads the same map the host reads from.
///
/// # Examples
///
/// ```rust
/// use inicfg::adapters::{IniConfigurationProvider, IniConfigurationSource, IniParser};
/// use inicfg::adapters::PhysicalFileProvider;
/// use inicfg::ports::ConfigurationProvider;
/// use std::sync::Arc;
///
/// let mut source = IniConfigurationSource::new("unused.ini");
/// source.file_provider = Some(Arc::new(PhysicalFileProvider::new(".")));
/// source.parser = Some(Arc::new(IniParser::new()));
/// let provider = IniConfigurationProvider::from_source(source).unwrap();
///
/// provider.load_from("[db]\nhost=localhost\n".as_bytes()).unwrap();
/// assert_eq!(provider.get("DB:Host").as_deref(), Some("localhost"));
/// ```
#[derive(Clone)]
pub struct IniConfigurationProvider {
    path: PathBuf,
    optional: bool,
    reload_on_change: bool,
    reload_delay: Duration,
    file_provider: Arc<dyn FileProvider>,
    parser: Arc<dyn SectionParser>,
    data: Arc<RwLock<FlatConfigMap>>,
}

impl IniConfigurationProvider {
    /// Creates a provider with explicit collaborators and no data loaded.
    pub fn new(
        path: impl Into<PathBuf>,
        file_provider: Arc<dyn FileProvider>,
        parser: Arc<dyn SectionParser>,
    ) -> Self {
        Self {
            path: path.into(),
            optional: false,
            reload_on_change: false,
            reload_delay: DEFAULT_RELOAD_DELAY,
            file_provider,
            parser,
            data: Arc::new(RwLock::new(FlatConfigMap::new())),
        }
    }

    /// Creates a provider bound to a source whose collaborators are resolved.
    ///
    /// Call [`IniConfigurationSource::ensure_defaults`] first; a source without
    /// a file provider or parser is rejected.
    pub fn from_source(source: IniConfigurationSource) -> Result<Self> {
        let (file_provider, parser) = match (source.file_provider, source.parser) {
            (Some(file_provider), Some(parser)) => (file_provider, parser),
            _ => {
                return Err(ConfigError::SourceError {
                    source_name: SOURCE_NAME.to_string(),
                    message: "source has no resolved file provider or parser".to_string(),
                    source: None,
                })
            }
        };

        let mut provider = Self::new(source.path, file_provider, parser);
        provider.optional = source.optional;
        provider.reload_on_change = source.reload_on_change;
        provider.reload_delay = source.reload_delay;
        Ok(provider)
    }

    /// Flattens sections into `section:key` entries, in section order.
    ///
    /// Root-section keys keep their bare name. Two entries that flatten to the
    /// same key (ignoring case) fail with [`ConfigError::DuplicateKey`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inicfg::adapters::IniConfigurationProvider;
    /// use inicfg::domain::Section;
    ///
    /// let sections = vec![Section::named("db").with_entry("host", "localhost")];
    /// let map = IniConfigurationProvider::flatten(&sections).unwrap();
    /// assert_eq!(map.get("db:host"), Some("localhost"));
    ///
    /// let twice = vec![
    ///     Section::named("db").with_entry("host", "a"),
    ///     Section::named("db").with_entry("host", "b"),
    /// ];
    /// assert!(IniConfigurationProvider::flatten(&twice).is_err());
    /// ```
    pub fn flatten(sections: &[Section]) -> Result<FlatConfigMap> {
        let mut data = FlatConfigMap::new();
        for section in sections {
            for (key, value) in section.entries() {
                let flat_key = match section.name() {
                    Some(name) => ConfigKey::combine([name, key]),
                    None => ConfigKey::from(key),
                };
                data.try_insert(flat_key, value)?;
            }
        }
        Ok(data)
    }

    /// Reads a whole stream, parses it and replaces the loaded data.
    ///
    /// A leading UTF-8 byte order mark is ignored. On any error the previous
    /// data is kept.
    pub fn load_from<R: Read>(&self, mut reader: R) -> Result<()> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

        let sections = self.parser.parse(content)?;
        let data = Self::flatten(&sections)?;

        tracing::debug!(
            "Loaded {} keys from {} sections of '{}'",
            data.len(),
            sections.len(),
            self.path.display()
        );
        self.replace(data)
    }

    /// Returns a copy of the currently loaded data.
    pub fn snapshot(&self) -> Result<FlatConfigMap> {
        self.data
            .read()
            .map(|data| data.clone())
            .map_err(|_| ConfigError::poisoned(SOURCE_NAME))
    }

    /// Path of the file, relative to the file provider.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a missing file is tolerated.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Whether the host should reload this provider on file changes.
    pub fn reloads_on_change(&self) -> bool {
        self.reload_on_change
    }

    fn replace(&self, data: FlatConfigMap) -> Result<()> {
        let mut current = self
            .data
            .write()
            .map_err(|_| ConfigError::poisoned(SOURCE_NAME))?;
        *current = data;
        Ok(())
    }
}

impl fmt::Debug for IniConfigurationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IniConfigurationProvider")
            .field("path", &self.path)
            .field("optional", &self.optional)
            .field("reload_on_change", &self.reload_on_change)
            .field("file_provider", &self.file_provider)
            .finish_non_exhaustive()
    }
}

impl ConfigurationProvider for IniConfigurationProvider {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn load(&self) -> Result<()> {
        match self.file_provider.open(&self.path)? {
            Some(stream) => self.load_from(stream),
            None if self.optional => {
                tracing::debug!(
                    "Optional configuration file '{}' not found, using empty configuration",
                    self.path.display()
                );
                self.replace(FlatConfigMap::new())
            }
            None => Err(ConfigError::FileNotFound {
                path: self.path.clone(),
            }),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        let data = self.data.read().ok()?;
        data.get(key).map(String::from)
    }

    fn keys(&self) -> Vec<ConfigKey> {
        match self.data.read() {
            Ok(data) => data.keys().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn watch_path(&self) -> Option<PathBuf> {
        if self.reload_on_change {
            self.file_provider.physical_path(&self.path)
        } else {
            None
        }
    }

    fn reload_delay(&self) -> Duration {
        self.reload_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::IniParser;
    use crate::ports::FileStream;
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct MemoryFiles {
        files: Mutex<HashMap<PathBuf, String>>,
    }

    impl MemoryFiles {
        fn with(path: &str, content: &str) -> Arc<Self> {
            let files = Self::default();
            files.write(path, content);
            Arc::new(files)
        }

        fn write(&self, path: &str, content: &str) {
            self.files
                .lock()
                .unwrap()
                .insert(PathBuf::from(path), content.to_string());
        }
    }

    impl FileProvider for MemoryFiles {
        fn open(&self, path: &Path) -> Result<Option<FileStream>> {
            Ok(self
                .files
                .lock()
                .unwrap()
                .get(path)
                .map(|c| Box::new(Cursor::new(c.clone().into_bytes())) as FileStream))
        }

        fn physical_path(&self, path: &Path) -> Option<PathBuf> {
            Some(Path::new("/memory").join(path))
        }
    }

    struct StubParser(Vec<Section>);

    impl SectionParser for StubParser {
        fn parse(&self, _content: &str) -> Result<Vec<Section>> {
            Ok(self.0.clone())
        }

        fn supported_extensions(&self) -> &[&str] {
            &["stub"]
        }
    }

    struct FailingParser;

    impl SectionParser for FailingParser {
        fn parse(&self, _content: &str) -> Result<Vec<Section>> {
            Err(ConfigError::ParseError {
                message: "unexpected token".to_string(),
                source: None,
            })
        }
    }

    fn ini_provider(files: Arc<MemoryFiles>, path: &str) -> IniConfigurationProvider {
        IniConfigurationProvider::new(path, files, Arc::new(IniParser::new()))
    }

    #[test]
    fn test_flatten_single_section() {
        let sections = vec![Section::named("db").with_entry("host", "localhost")];
        let map = IniConfigurationProvider::flatten(&sections).unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("db:host"), Some("localhost"));
    }

    #[test]
    fn test_flatten_keeps_parser_order() {
        let sections = vec![
            Section::named("b").with_entry("y", "1").with_entry("x", "2"),
            Section::named("a").with_entry("z", "3"),
        ];
        let map = IniConfigurationProvider::flatten(&sections).unwrap();

        let keys: Vec<&str> = map.keys().map(ConfigKey::as_str).collect();
        assert_eq!(keys, vec!["b:y", "b:x", "a:z"]);
    }

    #[test]
    fn test_flatten_root_keys_unprefixed() {
        let sections = vec![
            Section::root().with_entry("debug", "true"),
            Section::named("app").with_entry("debug", "false"),
        ];
        let map = IniConfigurationProvider::flatten(&sections).unwrap();

        assert_eq!(map.get("debug"), Some("true"));
        assert_eq!(map.get("app:debug"), Some("false"));
    }

    #[test]
    fn test_flatten_duplicate_sections_fail() {
        let sections = vec![
            Section::named("db").with_entry("host", "first"),
            Section::named("db").with_entry("host", "second"),
        ];
        let err = IniConfigurationProvider::flatten(&sections).unwrap_err();

        assert!(matches!(err, ConfigError::DuplicateKey { ref key } if key == "db:host"));
    }

    #[test]
    fn test_flatten_case_only_collision_fails() {
        let sections = vec![
            Section::named("DB").with_entry("host", "first"),
            Section::named("db").with_entry("HOST", "second"),
        ];
        let err = IniConfigurationProvider::flatten(&sections).unwrap_err();

        assert!(matches!(err, ConfigError::DuplicateKey { ref key } if key == "db:HOST"));
    }

    #[test]
    fn test_flatten_section_and_nested_key_collision_fails() {
        // "a:b" + "c" and "a" + "b:c" both flatten to "a:b:c"
        let sections = vec![
            Section::named("a:b").with_entry("c", "1"),
            Section::named("a").with_entry("b:c", "2"),
        ];
        assert!(matches!(
            IniConfigurationProvider::flatten(&sections),
            Err(ConfigError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn test_load_from_stream() {
        let provider = ini_provider(Arc::new(MemoryFiles::default()), "app.ini");
        provider
            .load_from("[db]\nhost=localhost\nport=5432\n".as_bytes())
            .unwrap();

        assert_eq!(provider.get("db:host").as_deref(), Some("localhost"));
        assert_eq!(provider.get("db:port").as_deref(), Some("5432"));
        assert_eq!(provider.keys().len(), 2);
    }

    #[test]
    fn test_load_from_case_insensitive_lookup() {
        let provider = ini_provider(Arc::new(MemoryFiles::default()), "app.ini");
        provider.load_from("[Section]\nKey=value\n".as_bytes()).unwrap();

        assert_eq!(provider.get("section:key").as_deref(), Some("value"));
        assert_eq!(provider.get("SECTION:KEY").as_deref(), Some("value"));
        assert_eq!(provider.keys()[0].as_str(), "Section:Key");
    }

    #[test]
    fn test_load_from_strips_bom() {
        let provider = ini_provider(Arc::new(MemoryFiles::default()), "app.ini");
        provider
            .load_from("\u{feff}[app]\nname=demo\n".as_bytes())
            .unwrap();

        assert_eq!(provider.get("app:name").as_deref(), Some("demo"));
    }

    #[test]
    fn test_load_from_invalid_utf8() {
        let provider = ini_provider(Arc::new(MemoryFiles::default()), "app.ini");
        let result = provider.load_from(&[0xff, 0xfe, 0x00][..]);

        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_load_from_uses_injected_parser() {
        let parser = StubParser(vec![Section::named("stub").with_entry("k", "v")]);
        let provider = IniConfigurationProvider::new(
            "ignored.stub",
            Arc::new(MemoryFiles::default()),
            Arc::new(parser),
        );
        provider.load_from("anything at all".as_bytes()).unwrap();

        assert_eq!(provider.get("stub:k").as_deref(), Some("v"));
    }

    #[test]
    fn test_parse_error_passes_through() {
        let provider = IniConfigurationProvider::new(
            "app.ini",
            Arc::new(MemoryFiles::default()),
            Arc::new(FailingParser),
        );
        match provider.load_from("x".as_bytes()) {
            Err(ConfigError::ParseError { message, .. }) => assert_eq!(message, "unexpected token"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_load_keeps_previous_data() {
        let provider = ini_provider(Arc::new(MemoryFiles::default()), "app.ini");
        provider.load_from("[db]\nhost=old\n".as_bytes()).unwrap();

        let result = provider.load_from("[db]\nHost=a\nhost=b\n".as_bytes());
        assert!(result.is_err());
        assert_eq!(provider.get("db:host").as_deref(), Some("old"));

        let result = provider.load_from("[broken\n".as_bytes());
        assert!(result.is_err());
        assert_eq!(provider.get("db:host").as_deref(), Some("old"));
    }

    #[test]
    fn test_load_existing_file() {
        let files = MemoryFiles::with("app.ini", "[server]\nport=8080\n");
        let provider = ini_provider(files, "app.ini");
        provider.load().unwrap();

        assert_eq!(provider.get("server:port").as_deref(), Some("8080"));
    }

    #[test]
    fn test_load_missing_required_file() {
        let provider = ini_provider(Arc::new(MemoryFiles::default()), "missing.ini");

        match provider.load() {
            Err(ConfigError::FileNotFound { path }) => assert_eq!(path, Path::new("missing.ini")),
            other => panic!("expected missing file error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_optional_file_is_empty() {
        let mut provider = ini_provider(Arc::new(MemoryFiles::default()), "missing.ini");
        provider.optional = true;
        provider.load().unwrap();

        assert!(provider.keys().is_empty());
        assert!(provider.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_optional_file_removed_clears_data() {
        let files = MemoryFiles::with("app.ini", "[app]\nname=demo\n");
        let mut provider = ini_provider(Arc::clone(&files), "app.ini");
        provider.optional = true;
        provider.load().unwrap();
        assert_eq!(provider.keys().len(), 1);

        files.files.lock().unwrap().clear();
        provider.load().unwrap();
        assert!(provider.keys().is_empty());
    }

    #[test]
    fn test_reload_replaces_data() {
        let files = MemoryFiles::with("app.ini", "[app]\nname=first\nold=1\n");
        let provider = ini_provider(Arc::clone(&files), "app.ini");
        provider.load().unwrap();

        files.write("app.ini", "[app]\nname=second\n");
        provider.load().unwrap();

        assert_eq!(provider.get("app:name").as_deref(), Some("second"));
        assert_eq!(provider.get("app:old"), None);
    }

    #[test]
    fn test_clones_share_data() {
        let files = MemoryFiles::with("app.ini", "[app]\nname=shared\n");
        let provider = ini_provider(files, "app.ini");
        let clone = provider.clone();

        clone.load().unwrap();
        assert_eq!(provider.get("app:name").as_deref(), Some("shared"));
    }

    #[test]
    fn test_watch_path_only_when_reloading() {
        let mut provider = ini_provider(Arc::new(MemoryFiles::default()), "app.ini");
        assert_eq!(provider.watch_path(), None);

        provider.reload_on_change = true;
        assert_eq!(provider.watch_path(), Some(PathBuf::from("/memory/app.ini")));
    }

    #[test]
    fn test_from_source_requires_resolved_collaborators() {
        let source = IniConfigurationSource::new("app.ini");
        assert!(IniConfigurationProvider::from_source(source).is_err());
    }

    #[test]
    fn test_from_source_copies_flags() {
        let mut source = IniConfigurationSource::new("app.ini");
        source.optional = true;
        source.reload_on_change = true;
        source.reload_delay = Duration::from_secs(2);
        source.file_provider = Some(Arc::new(MemoryFiles::default()));
        source.parser = Some(Arc::new(IniParser::new()));

        let provider = IniConfigurationProvider::from_source(source).unwrap();
        assert!(provider.is_optional());
        assert!(provider.reloads_on_change());
        assert_eq!(provider.reload_delay(), Duration::from_secs(2));
        assert_eq!(provider.path(), Path::new("app.ini"));
        assert_eq!(provider.name(), "ini-file");
    }
}
