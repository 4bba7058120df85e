// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jt-core: Shared library for the jotter notes client
//!
//! This crate provides the note model, its document encoding, and the
//! collaborator traits (document store, identity source, image host) that
//! the jotter client and the in-process store both build on.

pub mod clock;
pub mod display;
pub mod error;
pub mod identity;
pub mod jsonl;
pub mod note;
pub mod palette;
pub mod store;
pub mod tags;
pub mod value;

pub use clock::{ClockSource, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use identity::IdentitySource;
pub use note::{
    derive_title, field_update, share_link, Identity, Note, NoteDraft, NoteId, SortOrder,
    DEFAULT_COLLECTION,
};
pub use palette::{Color, PALETTE};
pub use store::{BoxFuture, Document, DocumentStore, ImageHost, Query, Snapshot, Subscription};
pub use tags::Tags;
pub use value::{FieldMap, Timestamp, Value};
