// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered, duplicate-free tag list.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tags on a note. Insertion order is kept for display; adding a tag that is
/// already present leaves the list untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Tags(Vec<String>);

impl Tags {
    pub fn new() -> Self {
        Tags(Vec::new())
    }

    /// Adds a tag after trimming it.
    ///
    /// Returns `Ok(true)` if the tag was added, `Ok(false)` if it was already
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTag`] if the tag is empty after trimming.
    pub fn insert(&mut self, tag: &str) -> Result<bool> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(Error::InvalidTag(tag.to_string()));
        }
        if self.contains(tag) {
            return Ok(false);
        }
        self.0.push(tag.to_string());
        Ok(true)
    }

    /// Removes a tag. Returns whether anything was removed.
    pub fn remove(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Builds a tag list from stored values, dropping blanks and repeats.
impl From<Vec<String>> for Tags {
    fn from(items: Vec<String>) -> Self {
        let mut tags = Tags::new();
        for item in items {
            let _ = tags.insert(&item);
        }
        tags
    }
}

impl From<Tags> for Vec<String> {
    fn from(tags: Tags) -> Self {
        tags.0
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;
