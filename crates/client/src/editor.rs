// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Note form session.
//!
//! A [`NoteEditor`] owns the draft being edited and the status the form
//! shows. The view that opened it holds a [`ViewGuard`]; once the guard is
//! dismissed or dropped, results of saves and uploads still in flight are
//! discarded without touching the editor.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use jt_core::{Color, ImageHost, NoteDraft, NoteId};

use crate::actions::NoteActions;
use crate::error::Result;

/// Held by the view for as long as it is on screen.
#[derive(Debug)]
pub struct ViewGuard {
    active: Arc<AtomicBool>,
}

impl ViewGuard {
    pub fn new() -> Self {
        ViewGuard {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn ticket(&self) -> ViewTicket {
        ViewTicket {
            active: Arc::clone(&self.active),
        }
    }

    /// Marks the view as gone.
    pub fn dismiss(&self) {
        self.active.store(false, Ordering::SeqCst);
    }
}

impl Default for ViewGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewGuard {
    fn drop(&mut self) {
        self.dismiss();
    }
}

/// Checks whether the originating view is still active.
#[derive(Debug, Clone)]
pub struct ViewTicket {
    active: Arc<AtomicBool>,
}

impl ViewTicket {
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

/// Result of an operation that may outlive its view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Applied(T),
    /// The view was dismissed before the result arrived.
    Discarded,
}

impl<T> Outcome<T> {
    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(value) => Some(value),
            Outcome::Discarded => None,
        }
    }
}

/// What the form shows besides the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorStatus {
    pub error: Option<String>,
    pub saving: bool,
    pub uploading: bool,
    pub saved_note_id: Option<NoteId>,
    pub share_link: Option<String>,
}

pub struct NoteEditor {
    actions: NoteActions,
    images: Arc<dyn ImageHost>,
    ticket: ViewTicket,
    editing: Option<NoteId>,
    draft: NoteDraft,
    status: EditorStatus,
}

impl NoteEditor {
    /// Starts an empty form for a new note.
    pub fn new(actions: NoteActions, images: Arc<dyn ImageHost>, ticket: ViewTicket) -> Self {
        NoteEditor {
            actions,
            images,
            ticket,
            editing: None,
            draft: NoteDraft::new(),
            status: EditorStatus::default(),
        }
    }

    /// Fills the form from an existing note the user owns.
    pub async fn load(&mut self, id: &NoteId) -> Result<Outcome<()>> {
        let result = self.actions.load_for_edit(id).await;
        if !self.ticket.is_active() {
            debug!("discarding load of {} for dismissed view", id);
            return Ok(Outcome::Discarded);
        }
        let note = result?;
        self.draft = NoteDraft::from_note(&note);
        self.editing = Some(note.id);
        self.status = EditorStatus::default();
        Ok(Outcome::Applied(()))
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut NoteDraft {
        &mut self.draft
    }

    pub fn status(&self) -> &EditorStatus {
        &self.status
    }

    /// The note being edited; `None` until a new note is first saved.
    pub fn editing(&self) -> Option<&NoteId> {
        self.editing.as_ref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.draft.category = category;
    }

    /// Adds a trimmed tag; `false` if it was already there.
    pub fn add_tag(&mut self, tag: &str) -> Result<bool> {
        Ok(self.draft.tags.insert(tag)?)
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.draft.tags.remove(tag)
    }

    /// Removes and returns the image URL at `index`.
    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        if index < self.draft.image_urls.len() {
            Some(self.draft.image_urls.remove(index))
        } else {
            None
        }
    }

    pub fn toggle_pinned(&mut self) -> bool {
        self.draft.pinned = !self.draft.pinned;
        self.draft.pinned
    }

    pub fn toggle_public(&mut self) -> bool {
        self.draft.is_public = !self.draft.is_public;
        self.draft.is_public
    }

    pub fn set_color(&mut self, color: Color) {
        self.draft.color = color;
    }

    /// Creates or updates the note.
    ///
    /// On failure the draft is kept and `status.error` says why, so the user
    /// can retry. A public note gets its share link once saved.
    pub async fn save(&mut self) -> Result<Outcome<NoteId>> {
        self.status.saving = true;
        self.status.error = None;

        let result = match self.editing.clone() {
            Some(id) => self.actions.update(&id, &self.draft).await.map(|()| id),
            None => self.actions.create(&self.draft).await,
        };

        if !self.ticket.is_active() {
            debug!("discarding save result for dismissed view");
            return Ok(Outcome::Discarded);
        }
        self.status.saving = false;

        match result {
            Ok(id) => {
                self.status.share_link = if self.draft.is_public {
                    Some(self.actions.share_link(&id))
                } else {
                    None
                };
                self.status.saved_note_id = Some(id.clone());
                self.editing = Some(id.clone());
                Ok(Outcome::Applied(id))
            }
            Err(e) => {
                warn!("save failed: {}", e);
                self.status.error = Some(format!("Error saving note: {}", e));
                Err(e)
            }
        }
    }

    /// Uploads an image and attaches its URL to the draft.
    ///
    /// A failed upload leaves the attached images and the rest of the form
    /// as they were.
    pub async fn attach_image(&mut self, bytes: Vec<u8>) -> Result<Outcome<String>> {
        self.status.uploading = true;
        let result = self.images.upload(bytes).await;

        if !self.ticket.is_active() {
            debug!("discarding upload result for dismissed view");
            return Ok(Outcome::Discarded);
        }
        self.status.uploading = false;

        match result {
            Ok(url) => {
                self.draft.image_urls.push(url.clone());
                Ok(Outcome::Applied(url))
            }
            Err(e) => {
                warn!("upload failed: {}", e);
                self.status.error = Some(format!("Error uploading image: {}", e));
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
