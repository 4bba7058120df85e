// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.origin, "http://localhost:3000");
    assert_eq!(config.collection, "notes");
    assert_eq!(config.default_sort, SortOrder::Desc);
    assert_eq!(config.categories, vec!["all", "work", "personal", "ideas", "tasks"]);
    assert_eq!(config.page_size, None);
}

#[test]
fn empty_file_uses_defaults() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
}

#[test]
fn parses_all_fields() {
    let config = Config::parse(
        r#"
origin = "https://notes.example.com"
collection = "memos"
default_sort = "asc"
categories = ["all", "home"]
page_size = 10
"#,
    )
    .unwrap();

    assert_eq!(config.origin, "https://notes.example.com");
    assert_eq!(config.collection, "memos");
    assert_eq!(config.default_sort, SortOrder::Asc);
    assert_eq!(config.categories, vec!["all", "home"]);
    assert_eq!(config.page_size, Some(10));
}

#[parameterized(
    bad_sort = { r#"default_sort = "newest""# },
    unknown_key = { r#"theme = "dark""# },
    zero_page = { "page_size = 0" },
    wrong_type = { "page_size = \"ten\"" },
)]
fn rejects_invalid(content: &str) {
    let err = Config::parse(content).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn load_missing_is_not_found() {
    let temp = TempDir::new().unwrap();
    let err = Config::load(&temp.path().join("config.toml")).unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound(_)));
}

#[test]
fn load_or_default_missing_file() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_or_default(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn save_and_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");
    let config = Config {
        origin: "https://x.test".to_string(),
        page_size: Some(5),
        ..Config::default()
    };

    config.save(&path).unwrap();
    assert_eq!(Config::load(&path).unwrap(), config);
}

#[test]
fn default_path_ends_with_file_name() {
    if let Some(path) = Config::default_path() {
        assert!(path.ends_with("jotter/config.toml"));
    }
}
