// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check key case folding and section flattening against
//! arbitrary section names, keys and values.

use inicfg::adapters::{IniConfigurationProvider, IniParser};
use inicfg::domain::{ConfigError, ConfigKey, Section};
use inicfg::ports::{ConfigurationProvider, SectionParser};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};
use std::fmt::Write;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._/-]{0,12}"
}

fn sections_strategy() -> impl Strategy<Value = BTreeMap<String, BTreeMap<String, String>>> {
    prop::collection::btree_map(
        name_strategy(),
        prop::collection::btree_map(name_strategy(), value_strategy(), 1..6),
        1..5,
    )
}

fn render(sections: &BTreeMap<String, BTreeMap<String, String>>) -> String {
    let mut text = String::new();
    for (name, entries) in sections {
        writeln!(text, "[{}]", name).unwrap();
        for (key, value) in entries {
            writeln!(text, "{} = {}", key, value).unwrap();
        }
        text.push('\n');
    }
    text
}

// Test that ConfigKey keeps its original spelling
proptest! {
    #[test]
    fn test_config_key_from_any_string(s in "\\PC*") {
        let key = ConfigKey::from(s.clone());
        prop_assert_eq!(key.as_str(), s.as_str());
    }
}

// Test that keys differing only in ASCII case are equal and hash the same
proptest! {
    #[test]
    fn test_config_key_case_folding(s in "[a-zA-Z0-9_:.]{1,24}") {
        let upper = ConfigKey::from(s.to_ascii_uppercase());
        let lower = ConfigKey::from(s.to_ascii_lowercase());
        prop_assert_eq!(&upper, &lower);

        let mut set = HashSet::new();
        set.insert(upper);
        prop_assert!(!set.insert(lower));
    }
}

// Test that keys with different letters stay distinct
proptest! {
    #[test]
    fn test_config_key_inequality(a in "[a-z]{1,10}", b in "[a-z]{1,10}") {
        if a != b {
            prop_assert_ne!(ConfigKey::from(a.to_uppercase()), ConfigKey::from(b));
        }
    }
}

// Test that combined keys live under their section
proptest! {
    #[test]
    fn test_combine_is_under_section(section in name_strategy(), key in name_strategy()) {
        let combined = ConfigKey::combine([section.as_str(), key.as_str()]);
        prop_assert_eq!(combined.as_str(), format!("{}:{}", section, key));
        prop_assert!(combined.is_under(&section.to_uppercase()));
    }
}

// Test that every parsed entry is reachable as section:key in any case
proptest! {
    #[test]
    fn test_flatten_reaches_every_entry(sections in sections_strategy()) {
        let parsed: Vec<Section> = sections
            .iter()
            .map(|(name, entries)| {
                entries
                    .iter()
                    .fold(Section::named(name.as_str()), |s, (k, v)| s.with_entry(k.as_str(), v.as_str()))
            })
            .collect();

        let map = IniConfigurationProvider::flatten(&parsed).unwrap();
        let total: usize = sections.values().map(BTreeMap::len).sum();
        prop_assert_eq!(map.len(), total);

        for (name, entries) in &sections {
            for (key, value) in entries {
                let lookup = format!("{}:{}", name.to_uppercase(), key);
                prop_assert_eq!(map.get(&lookup), Some(value.as_str()));
            }
        }
    }
}

// Test that rendered INI text loads to the same flat map
proptest! {
    #[test]
    fn test_ini_text_loads_every_entry(sections in sections_strategy()) {
        let text = render(&sections);
        let parsed = IniParser::new().parse(&text).unwrap();
        prop_assert_eq!(parsed.len(), sections.len());

        let map = IniConfigurationProvider::flatten(&parsed).unwrap();
        for (name, entries) in &sections {
            for (key, value) in entries {
                prop_assert_eq!(map.get(&format!("{}:{}", name, key)), Some(value.as_str()));
            }
        }
    }
}

// Test that loading through a provider never exposes keys outside the file
proptest! {
    #[test]
    fn test_provider_keys_match_file(sections in sections_strategy()) {
        let text = render(&sections);
        let mut source = inicfg::adapters::IniConfigurationSource::new("unused.ini");
        source.file_provider = Some(std::sync::Arc::new(
            inicfg::adapters::PhysicalFileProvider::new("."),
        ));
        source.parser = Some(std::sync::Arc::new(IniParser::new()));
        let provider = IniConfigurationProvider::from_source(source).unwrap();

        provider.load_from(text.as_bytes()).unwrap();

        let expected: Vec<ConfigKey> = sections
            .iter()
            .flat_map(|(name, entries)| {
                entries
                    .keys()
                    .map(move |key| ConfigKey::combine([name.as_str(), key.as_str()]))
            })
            .collect();
        prop_assert_eq!(provider.keys(), expected);
    }
}

// Test that a key repeated with different case always fails
proptest! {
    #[test]
    fn test_case_only_duplicates_fail(
        section in name_strategy(),
        key in "[a-z]{1,8}",
        first in value_strategy(),
        second in value_strategy(),
    ) {
        let parsed = vec![Section::named(section.as_str())
            .with_entry(key.as_str(), first.as_str())
            .with_entry(key.to_uppercase(), second.as_str())];

        let result = IniConfigurationProvider::flatten(&parsed);
        let expected = format!("{}:{}", section, key.to_uppercase());
        let reports_later_key = matches!(
            result,
            Err(ConfigError::DuplicateKey { key: ref reported }) if *reported == expected
        );
        prop_assert!(reports_later_key);
    }
}
