// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Note writes.
//!
//! None of these touch a published list. The store pushes the change to every
//! live query, and that push is what updates the dashboard.

use std::sync::Arc;

use tracing::{debug, info};

use jt_core::note::fields;
use jt_core::{
    field_update, share_link, DocumentStore, Error as CoreError, Identity, Note, NoteDraft,
    NoteId, Value,
};

use crate::config::Config;
use crate::error::Result;
use crate::session::SessionGate;

#[derive(Clone)]
pub struct NoteActions {
    store: Arc<dyn DocumentStore>,
    session: SessionGate,
    collection: String,
    origin: String,
}

impl NoteActions {
    pub fn new(store: Arc<dyn DocumentStore>, session: SessionGate, config: &Config) -> Self {
        NoteActions {
            store,
            session,
            collection: config.collection.clone(),
            origin: config.origin.clone(),
        }
    }

    /// Share link for `id` under the configured origin.
    pub fn share_link(&self, id: &NoteId) -> String {
        share_link(&self.origin, id)
    }

    /// Saves a new note owned by the signed-in user.
    pub async fn create(&self, draft: &NoteDraft) -> Result<NoteId> {
        let owner = self.session.require()?;
        let id = self
            .store
            .create(&self.collection, draft.to_create_fields(&owner))
            .await?;
        info!("created note {}", id);
        Ok(id)
    }

    /// Writes every editable field of `draft` over note `id`.
    ///
    /// The note must exist and belong to the signed-in user.
    pub async fn update(&self, id: &NoteId, draft: &NoteDraft) -> Result<()> {
        self.load_for_edit(id).await?;
        self.store
            .set(&self.collection, id, draft.to_update_fields(), true)
            .await?;
        info!("updated note {}", id);
        Ok(())
    }

    pub async fn set_pinned(&self, note: &Note, pinned: bool) -> Result<()> {
        self.write_field(note, fields::PINNED, Value::from(pinned))
            .await
    }

    pub async fn set_public(&self, note: &Note, is_public: bool) -> Result<()> {
        self.write_field(note, fields::IS_PUBLIC, Value::from(is_public))
            .await
    }

    /// Adds `tag` to the note. Returns `false` and writes nothing when the
    /// tag is already there.
    pub async fn add_tag(&self, note: &Note, tag: &str) -> Result<bool> {
        self.check_owner(note)?;
        let mut tags = note.tags.clone();
        if !tags.insert(tag)? {
            debug!("tag '{}' already on note {}", tag.trim(), note.id);
            return Ok(false);
        }
        self.write_field(note, fields::TAGS, Value::from(Vec::from(tags)))
            .await?;
        Ok(true)
    }

    pub async fn remove_tag(&self, note: &Note, tag: &str) -> Result<bool> {
        self.check_owner(note)?;
        let mut tags = note.tags.clone();
        if !tags.remove(tag) {
            return Ok(false);
        }
        self.write_field(note, fields::TAGS, Value::from(Vec::from(tags)))
            .await?;
        Ok(true)
    }

    pub async fn add_image(&self, note: &Note, url: String) -> Result<()> {
        let mut urls = note.image_urls.clone();
        urls.push(url);
        self.write_field(note, fields::IMAGE_URLS, Value::from(urls))
            .await
    }

    /// Removes the image at `index`; out of range is a no-op.
    pub async fn remove_image(&self, note: &Note, index: usize) -> Result<()> {
        if index >= note.image_urls.len() {
            return Ok(());
        }
        let mut urls = note.image_urls.clone();
        urls.remove(index);
        self.write_field(note, fields::IMAGE_URLS, Value::from(urls))
            .await
    }

    /// Permanently deletes note `id`.
    pub async fn delete(&self, id: &NoteId) -> Result<()> {
        self.load_for_edit(id).await?;
        self.store.delete(&self.collection, id).await?;
        info!("deleted note {}", id);
        Ok(())
    }

    /// Loads a note for the edit form. Only its owner may edit it.
    pub async fn load_for_edit(&self, id: &NoteId) -> Result<Note> {
        self.session.require()?;
        let note = self.fetch(id).await?;
        self.check_owner(&note)?;
        Ok(note)
    }

    /// Read-only view through a share link.
    ///
    /// Private notes of other users are reported as missing.
    pub async fn view_shared(&self, id: &NoteId, viewer: Option<&Identity>) -> Result<Note> {
        let note = self.fetch(id).await?;
        if !note.readable_by(viewer) {
            debug!("note {} is not readable by {:?}", id, viewer);
            return Err(CoreError::NotFound(id.to_string()).into());
        }
        Ok(note)
    }

    async fn fetch(&self, id: &NoteId) -> Result<Note> {
        match self.store.get_once(&self.collection, id).await? {
            Some(doc) => Ok(Note::from_document(id.clone(), &doc)),
            None => Err(CoreError::NotFound(id.to_string()).into()),
        }
    }

    fn check_owner(&self, note: &Note) -> Result<Identity> {
        let identity = self.session.require()?;
        if !note.is_owned_by(&identity) {
            return Err(CoreError::NotOwner(note.id.to_string()).into());
        }
        Ok(identity)
    }

    async fn write_field(&self, note: &Note, name: &str, value: Value) -> Result<()> {
        self.check_owner(note)?;
        self.store
            .set(&self.collection, &note.id, field_update(name, value), true)
            .await?;
        debug!("wrote {} on note {}", name, note.id);
        Ok(())
    }
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod tests;
