// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::Error;
use crate::test_helpers::make_doc;
use jt_core::Tags;
use jt_memstore::{MemoryAuth, MemoryStore};

struct Fixture {
    store: MemoryStore,
    auth: MemoryAuth,
    actions: NoteActions,
}

async fn fixture() -> Fixture {
    let store = MemoryStore::new();
    let mut shared = make_doc("pub", "u2", "Shared", 100);
    shared
        .fields
        .insert(fields::IS_PUBLIC.into(), Value::from(true));
    store
        .seed(
            "notes",
            vec![make_doc("mine", "u1", "Mine", 100), make_doc("theirs", "u2", "Theirs", 100), shared],
        )
        .await;
    let auth = MemoryAuth::signed_in(Identity::new("u1"));
    let actions = NoteActions::new(
        Arc::new(store.clone()),
        SessionGate::new(Arc::new(auth.clone())),
        &Config::default(),
    );
    Fixture {
        store,
        auth,
        actions,
    }
}

impl Fixture {
    async fn note(&self, id: &str) -> Note {
        let id = NoteId::new(id);
        let doc = self.store.get_once("notes", &id).await.unwrap().unwrap();
        Note::from_document(id, &doc)
    }
}

#[tokio::test]
async fn create_sets_owner_and_derived_title() {
    let f = fixture().await;
    let mut draft = NoteDraft::new();
    draft.content = "  Buy milk\nand eggs".into();

    let id = f.actions.create(&draft).await.unwrap();
    let note = f.note(id.as_str()).await;

    assert!(note.is_owned_by(&Identity::new("u1")));
    assert_eq!(note.title.as_deref(), Some("Buy milk"));
    assert!(note.created_at.is_some());
    assert!(note.updated_at.is_some());
}

#[tokio::test]
async fn create_requires_sign_in() {
    let f = fixture().await;
    f.auth.sign_out();

    let err = f.actions.create(&NoteDraft::new()).await.unwrap_err();
    assert!(matches!(err, Error::Core(CoreError::NotSignedIn)));
    assert_eq!(f.store.document_count("notes").await, 3);
}

#[tokio::test]
async fn update_keeps_owner() {
    let f = fixture().await;
    let mut draft = NoteDraft::from_note(&f.note("mine").await);
    draft.title = "Renamed".into();
    draft.category = Some("work".into());

    f.actions.update(&NoteId::new("mine"), &draft).await.unwrap();
    let note = f.note("mine").await;
    assert_eq!(note.title.as_deref(), Some("Renamed"));
    assert_eq!(note.category.as_deref(), Some("work"));
    assert!(note.is_owned_by(&Identity::new("u1")));
}

#[tokio::test]
async fn toggles_write_single_fields() {
    let f = fixture().await;
    let note = f.note("mine").await;

    f.actions.set_pinned(&note, true).await.unwrap();
    f.actions.set_public(&note, true).await.unwrap();

    let note = f.note("mine").await;
    assert!(note.pinned);
    assert!(note.is_public);
    assert_eq!(note.title.as_deref(), Some("Mine"));
}

#[tokio::test]
async fn duplicate_tag_is_a_no_op() {
    let f = fixture().await;
    let note = f.note("mine").await;
    assert!(f.actions.add_tag(&note, "work").await.unwrap());

    let note = f.note("mine").await;
    let before = note.updated_at;
    assert!(!f.actions.add_tag(&note, " work ").await.unwrap());

    let note = f.note("mine").await;
    assert_eq!(note.tags, Tags::from(vec!["work".to_string()]));
    assert_eq!(note.updated_at, before);
}

#[tokio::test]
async fn blank_tag_rejected() {
    let f = fixture().await;
    let note = f.note("mine").await;
    let err = f.actions.add_tag(&note, "   ").await.unwrap_err();
    assert!(matches!(err, Error::Core(CoreError::InvalidTag(_))));
}

#[tokio::test]
async fn remove_tag() {
    let f = fixture().await;
    let note = f.note("mine").await;
    f.actions.add_tag(&note, "a").await.unwrap();
    let note = f.note("mine").await;
    f.actions.add_tag(&note, "b").await.unwrap();

    let note = f.note("mine").await;
    assert!(f.actions.remove_tag(&note, "a").await.unwrap());
    assert!(!f.actions.remove_tag(&note, "zzz").await.unwrap());
    assert_eq!(f.note("mine").await.tags.as_slice(), ["b"]);
}

#[tokio::test]
async fn add_and_remove_images() {
    let f = fixture().await;
    let note = f.note("mine").await;
    f.actions.add_image(&note, "https://img/1".into()).await.unwrap();
    let note = f.note("mine").await;
    f.actions.add_image(&note, "https://img/2".into()).await.unwrap();

    let note = f.note("mine").await;
    assert_eq!(note.image_urls, ["https://img/1", "https://img/2"]);

    f.actions.remove_image(&note, 0).await.unwrap();
    f.actions.remove_image(&note, 9).await.unwrap();
    assert_eq!(f.note("mine").await.image_urls, ["https://img/2"]);
}

#[tokio::test]
async fn only_owner_may_modify() {
    let f = fixture().await;
    let theirs = f.note("theirs").await;

    let err = f.actions.set_pinned(&theirs, true).await.unwrap_err();
    assert!(matches!(err, Error::Core(CoreError::NotOwner(_))));
    assert!(!f.note("theirs").await.pinned);

    let err = f.actions.load_for_edit(&theirs.id).await.unwrap_err();
    assert!(matches!(err, Error::Core(CoreError::NotOwner(_))));
}

#[tokio::test]
async fn delete_is_permanent() {
    let f = fixture().await;
    f.actions.delete(&NoteId::new("mine")).await.unwrap();

    let err = f.actions.load_for_edit(&NoteId::new("mine")).await.unwrap_err();
    assert!(matches!(err, Error::Core(CoreError::NotFound(_))));
}

#[tokio::test]
async fn update_of_foreign_note_is_rejected() {
    let f = fixture().await;
    let mut draft = NoteDraft::from_note(&f.note("theirs").await);
    draft.title = "Hijacked".into();

    let err = f.actions.update(&NoteId::new("theirs"), &draft).await.unwrap_err();
    assert!(matches!(err, Error::Core(CoreError::NotOwner(_))));
    assert_eq!(f.note("theirs").await.title.as_deref(), Some("Theirs"));
}

#[tokio::test]
async fn update_of_missing_note_does_not_create_it() {
    let f = fixture().await;
    let mut draft = NoteDraft::new();
    draft.title = "Ghost".into();

    let err = f.actions.update(&NoteId::new("ghost"), &draft).await.unwrap_err();
    assert!(matches!(err, Error::Core(CoreError::NotFound(_))));
    assert_eq!(f.store.document_count("notes").await, 3);
}

#[tokio::test]
async fn delete_of_foreign_note_is_rejected() {
    let f = fixture().await;

    let err = f.actions.delete(&NoteId::new("theirs")).await.unwrap_err();
    assert!(matches!(err, Error::Core(CoreError::NotOwner(_))));
    assert_eq!(f.note("theirs").await.title.as_deref(), Some("Theirs"));
    assert_eq!(f.store.document_count("notes").await, 3);
}

#[tokio::test]
async fn write_failure_reports_cause() {
    let f = fixture().await;
    f.store.set_fail_writes(true);
    let note = f.note("mine").await;

    let err = f.actions.set_pinned(&note, true).await.unwrap_err();
    assert!(err.to_string().contains("permission denied"));
}

#[tokio::test]
async fn view_shared_respects_visibility() {
    let f = fixture().await;
    let u1 = Identity::new("u1");

    let shared = f.actions.view_shared(&NoteId::new("pub"), None).await.unwrap();
    assert_eq!(shared.title.as_deref(), Some("Shared"));

    let own = f
        .actions
        .view_shared(&NoteId::new("mine"), Some(&u1))
        .await
        .unwrap();
    assert_eq!(own.id.as_str(), "mine");

    let err = f
        .actions
        .view_shared(&NoteId::new("theirs"), Some(&u1))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Core(CoreError::NotFound(_))));
}

#[test]
fn share_link_uses_configured_origin() {
    let store = MemoryStore::new();
    let config = Config {
        origin: "https://notes.test/".into(),
        ..Config::default()
    };
    let actions = NoteActions::new(
        Arc::new(store),
        SessionGate::new(Arc::new(MemoryAuth::new())),
        &config,
    );
    assert_eq!(
        actions.share_link(&NoteId::new("abc")),
        "https://notes.test/view/abc"
    );
}
