// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard view derivation: text search, category filter and paging.
//!
//! Everything here is pure. The projected view keeps the order of the
//! list it was derived from.

use jt_core::Note;

const ALL_CATEGORIES: &str = "all";

/// Category selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    pub fn matches(&self, note: &Note) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => note.category.as_deref() == Some(name.as_str()),
        }
    }
}

/// Search term and category chosen on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    pub search: String,
    pub category: Category,
}

impl ViewFilter {
    pub fn new(search: impl Into<String>, category: Category) -> Self {
        ViewFilter {
            search: search.into(),
            category,
        }
    }

    /// `"all"` selects every category; anything else names one.
    pub fn parse_category(s: &str) -> Category {
        if s == ALL_CATEGORIES {
            Category::All
        } else {
            Category::Named(s.to_string())
        }
    }

    pub fn is_searching(&self) -> bool {
        !self.search.is_empty()
    }

    /// Both the text and the category filter must match.
    pub fn matches(&self, note: &Note) -> bool {
        matches_search(note, &self.search.to_lowercase()) && self.category.matches(note)
    }
}

/// Case-insensitive substring match on title or content.
///
/// `needle` must already be lowercase. An empty needle matches every note.
fn matches_search(note: &Note, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let hit = |text: &Option<String>| {
        text.as_deref()
            .is_some_and(|t| t.to_lowercase().contains(needle))
    };
    hit(&note.title) || hit(&note.content)
}

/// Filters `notes`, preserving order.
pub fn project<'a>(notes: &'a [Note], filter: &ViewFilter) -> Vec<&'a Note> {
    let needle = filter.search.to_lowercase();
    notes
        .iter()
        .filter(|note| matches_search(note, &needle) && filter.category.matches(note))
        .collect()
}

/// A window over the projected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: usize,
    pub limit: usize,
}

impl Page {
    pub fn first(limit: usize) -> Self {
        Page { offset: 0, limit }
    }

    /// The `n`th page (zero-based) of `limit` items.
    pub fn nth(n: usize, limit: usize) -> Self {
        Page {
            offset: n.saturating_mul(limit),
            limit,
        }
    }
}

pub fn paginate<'a>(view: &[&'a Note], page: Page) -> Vec<&'a Note> {
    view.iter()
        .skip(page.offset)
        .take(page.limit)
        .copied()
        .collect()
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod tests;
