// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The note entity and its document encoding.
//!
//! A [`Note`] is what the dashboard renders; it is decoded leniently from a
//! raw document so a malformed field never hides the rest of the note. A
//! [`NoteDraft`] is the editable form state that turns into write payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::palette::Color;
use crate::tags::Tags;
use crate::value::{FieldMap, Value};

/// Document field names.
pub mod fields {
    pub const OWNER_ID: &str = "ownerId";
    pub const TITLE: &str = "title";
    pub const CONTENT: &str = "content";
    pub const CATEGORY: &str = "category";
    pub const TAGS: &str = "tags";
    pub const COLOR: &str = "color";
    pub const COLOR_INDEX: &str = "colorIndex";
    pub const PINNED: &str = "pinned";
    pub const IS_PUBLIC: &str = "isPublic";
    pub const IMAGE_URLS: &str = "imageUrls";
    pub const CREATED_AT: &str = "createdAt";
    pub const UPDATED_AT: &str = "updatedAt";
}

/// Collection holding notes unless configured otherwise.
pub const DEFAULT_COLLECTION: &str = "notes";

/// Shown when neither title nor content yields a title.
pub const UNTITLED: &str = "Untitled Note";

/// Maximum length of a title derived from content.
pub const DERIVED_TITLE_MAX_CHARS: usize = 30;

/// Opaque, stable identifier of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Identity(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Backend-assigned document id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        NoteId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        NoteId(s.to_string())
    }
}

/// Dashboard ordering on `updated_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    /// Newest first.
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Button label in the dashboard toolbar.
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Oldest",
            SortOrder::Desc => "Newest",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(Error::InvalidSortOrder(s.to_string())),
        }
    }
}

/// A note as seen by its reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Creator; `None` only for malformed documents.
    pub owner_id: Option<Identity>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Tags,
    pub color: Color,
    pub pinned: bool,
    pub is_public: bool,
    pub image_urls: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Decodes a stored document.
    ///
    /// Never fails: missing or wrong-typed fields take their defaults. The
    /// color comes from `colorIndex`, then `color`, then a hash of the id.
    pub fn from_document(id: NoteId, doc: &FieldMap) -> Self {
        let text = |name: &str| doc.get(name).and_then(Value::as_str).map(str::to_string);
        let flag = |name: &str| doc.get(name).and_then(Value::as_bool).unwrap_or(false);
        let time = |name: &str| doc.get(name).and_then(Value::as_datetime);

        let color = doc
            .get(fields::COLOR_INDEX)
            .and_then(Value::as_i64)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(Color::from_index)
            .or_else(|| {
                doc.get(fields::COLOR)
                    .and_then(Value::as_str)
                    .and_then(Color::from_hex)
            })
            .unwrap_or_else(|| Color::for_id(id.as_str()));

        let tags = doc
            .get(fields::TAGS)
            .map(|v| Tags::from(v.string_items()))
            .unwrap_or_default();
        let image_urls = doc
            .get(fields::IMAGE_URLS)
            .map(Value::string_items)
            .unwrap_or_default();

        Note {
            owner_id: text(fields::OWNER_ID).map(Identity),
            title: text(fields::TITLE),
            content: text(fields::CONTENT),
            category: text(fields::CATEGORY),
            tags,
            color,
            pinned: flag(fields::PINNED),
            is_public: flag(fields::IS_PUBLIC),
            image_urls,
            created_at: time(fields::CREATED_AT),
            updated_at: time(fields::UPDATED_AT),
            id,
        }
    }

    /// Epoch milliseconds of the last write; 0 when unknown.
    pub fn sort_key(&self) -> i64 {
        self.updated_at.map_or(0, |t| t.timestamp_millis())
    }

    pub fn is_owned_by(&self, identity: &Identity) -> bool {
        self.owner_id.as_ref() == Some(identity)
    }

    /// Owners always; anyone else only through a public link.
    pub fn readable_by(&self, viewer: Option<&Identity>) -> bool {
        self.is_public || viewer.is_some_and(|v| self.is_owned_by(v))
    }
}

/// Editable note state behind the create and edit forms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub tags: Tags,
    pub color: Color,
    pub pinned: bool,
    pub is_public: bool,
    pub image_urls: Vec<String>,
}

impl NoteDraft {
    pub fn new() -> Self {
        NoteDraft::default()
    }

    /// Prefills a draft from a stored note.
    pub fn from_note(note: &Note) -> Self {
        NoteDraft {
            title: note.title.clone().unwrap_or_default(),
            content: note.content.clone().unwrap_or_default(),
            category: note.category.clone(),
            tags: note.tags.clone(),
            color: note.color,
            pinned: note.pinned,
            is_public: note.is_public,
            image_urls: note.image_urls.clone(),
        }
    }

    /// The title that will be written on save.
    pub fn final_title(&self) -> String {
        derive_title(&self.title, &self.content)
    }

    /// Payload for a new document.
    pub fn to_create_fields(&self, owner: &Identity) -> FieldMap {
        let mut doc = self.to_update_fields();
        doc.insert(fields::OWNER_ID.into(), Value::from(owner.as_str()));
        doc.insert(fields::CREATED_AT.into(), Value::ServerTimestamp);
        doc
    }

    /// Merge payload for an edit. Never touches owner or creation time.
    pub fn to_update_fields(&self) -> FieldMap {
        let mut doc = FieldMap::new();
        doc.insert(fields::TITLE.into(), Value::from(self.final_title()));
        doc.insert(fields::CONTENT.into(), Value::from(self.content.as_str()));
        doc.insert(fields::CATEGORY.into(), Value::from(self.category.clone()));
        doc.insert(fields::TAGS.into(), Value::from(Vec::from(self.tags.clone())));
        doc.insert(fields::COLOR.into(), Value::from(self.color.hex()));
        doc.insert(
            fields::COLOR_INDEX.into(),
            Value::from(self.color.index() as i64),
        );
        doc.insert(fields::PINNED.into(), Value::from(self.pinned));
        doc.insert(fields::IS_PUBLIC.into(), Value::from(self.is_public));
        doc.insert(fields::IMAGE_URLS.into(), Value::from(self.image_urls.clone()));
        doc.insert(fields::UPDATED_AT.into(), Value::ServerTimestamp);
        doc
    }
}

/// Picks the title to store.
///
/// A non-blank title wins. Otherwise the first line of the content, cut to
/// [`DERIVED_TITLE_MAX_CHARS`]; otherwise [`UNTITLED`].
pub fn derive_title(title: &str, content: &str) -> String {
    let title = title.trim();
    if !title.is_empty() {
        return title.to_string();
    }
    let first_line = content.trim().split('\n').next().unwrap_or("");
    let derived: String = first_line.chars().take(DERIVED_TITLE_MAX_CHARS).collect();
    if derived.is_empty() {
        UNTITLED.to_string()
    } else {
        derived
    }
}

/// Merge payload touching one field plus `updatedAt`.
pub fn field_update(name: &str, value: Value) -> FieldMap {
    let mut doc = FieldMap::new();
    doc.insert(name.to_string(), value);
    doc.insert(fields::UPDATED_AT.into(), Value::ServerTimestamp);
    doc
}

/// Public view URL for a note: `<origin>/view/<id>`.
pub fn share_link(origin: &str, id: &NoteId) -> String {
    format!("{}/view/{}", origin.trim_end_matches('/'), id)
}

#[cfg(test)]
#[path = "note_tests.rs"]
mod tests;
