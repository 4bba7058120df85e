// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for client module tests.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use chrono::{TimeZone, Utc};
use jt_core::note::fields;
use jt_core::{Document, FieldMap, Note, NoteId, Value};
use tokio::sync::watch;

use crate::sync::ListState;

/// A stored note document owned by `owner`, last written at `updated_ms`.
pub fn note_doc(owner: &str, title: &str, updated_ms: i64) -> FieldMap {
    let mut doc = FieldMap::new();
    doc.insert(fields::OWNER_ID.into(), Value::from(owner));
    doc.insert(fields::TITLE.into(), Value::from(title));
    let at = Utc.timestamp_millis_opt(updated_ms).single().unwrap();
    doc.insert(fields::UPDATED_AT.into(), Value::from(at));
    doc
}

pub fn make_doc(id: &str, owner: &str, title: &str, updated_ms: i64) -> Document {
    Document {
        id: NoteId::new(id),
        fields: note_doc(owner, title, updated_ms),
    }
}

/// A note with only the fields the projector looks at.
pub fn make_note(id: &str, title: Option<&str>, content: Option<&str>, category: Option<&str>) -> Note {
    let mut doc = FieldMap::new();
    if let Some(title) = title {
        doc.insert(fields::TITLE.into(), Value::from(title));
    }
    if let Some(content) = content {
        doc.insert(fields::CONTENT.into(), Value::from(content));
    }
    if let Some(category) = category {
        doc.insert(fields::CATEGORY.into(), Value::from(category));
    }
    Note::from_document(NoteId::new(id), &doc)
}

pub fn ids(notes: &[Note]) -> Vec<&str> {
    notes.iter().map(|n| n.id.as_str()).collect()
}

/// Waits until the published list state satisfies `pred`.
pub async fn wait_for(
    rx: &mut watch::Receiver<ListState>,
    pred: impl Fn(&ListState) -> bool,
) -> ListState {
    tokio::time::timeout(Duration::from_secs(2), rx.wait_for(|s| pred(s)))
        .await
        .unwrap()
        .unwrap()
        .clone()
}

/// Polls `cond` until it holds, yielding to other tasks in between.
pub async fn eventually(cond: impl Fn() -> bool) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while !cond() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .unwrap();
}
