// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration.
//!
//! Stored as TOML, by default in `<config dir>/jotter/config.toml`:
//! - `origin`: base URL used to build share links
//! - `collection`: document collection holding notes
//! - `default_sort`: initial dashboard order (`asc` or `desc`)
//! - `categories`: category choices offered by the dashboard
//! - `page_size`: optional page length for the dashboard view

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use jt_core::{SortOrder, DEFAULT_COLLECTION};

use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "jotter";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Origin for share links, e.g. `https://notes.example.com`.
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default)]
    pub default_sort: SortOrder,
    /// Category choices; `all` disables the category filter.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

fn default_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

fn default_categories() -> Vec<String> {
    ["all", "work", "personal", "ideas", "tasks"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            origin: default_origin(),
            collection: default_collection(),
            default_sort: SortOrder::default(),
            categories: default_categories(),
            page_size: None,
        }
    }
}

impl Config {
    /// Loads configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist and
    /// [`Error::Config`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        Self::parse(&content)
    }

    /// Like [`load`](Self::load), falling back to defaults when the file is missing.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(Error::ConfigNotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        if config.page_size == Some(0) {
            return Err(Error::Config("page_size must be at least 1".to_string()));
        }
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// `<config dir>/jotter/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
