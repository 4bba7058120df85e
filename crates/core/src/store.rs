// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Document store abstraction.
//!
//! The backend is reached only through [`DocumentStore`], which allows:
//! - A hosted backend client in production
//! - The in-process store from `jt-memstore` for tests and the CLI
//!
//! Live queries hand back a [`Subscription`]: a receiver of full snapshots
//! plus a cancel hook that runs exactly once, on [`Subscription::close`] or
//! on drop.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use tokio::sync::mpsc;

use crate::error::Result;
use crate::note::{fields, Identity, NoteId};
use crate::value::{FieldMap, Value};

/// Boxed future returned by collaborator traits.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Equality query over one collection: `field == value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: String,
    pub field: String,
    pub equals: Value,
}

impl Query {
    /// All documents in `collection` owned by `owner`.
    pub fn owned_by(collection: &str, owner: &Identity) -> Self {
        Query {
            collection: collection.to_string(),
            field: fields::OWNER_ID.to_string(),
            equals: Value::from(owner.as_str()),
        }
    }

    pub fn matches(&self, doc: &FieldMap) -> bool {
        doc.get(&self.field) == Some(&self.equals)
    }
}

/// A stored document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: NoteId,
    pub fields: FieldMap,
}

/// The complete result set of a live query at one moment.
///
/// Each snapshot supersedes every earlier one on the same subscription.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub documents: Vec<Document>,
}

impl Snapshot {
    pub fn new(documents: Vec<Document>) -> Self {
        Snapshot { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

type CancelFn = Box<dyn FnOnce() + Send>;

/// Handle to a live query.
pub struct Subscription {
    rx: mpsc::UnboundedReceiver<Snapshot>,
    cancel: Option<CancelFn>,
}

impl Subscription {
    /// Wraps a snapshot receiver; `cancel` detaches the sender on the store side.
    pub fn new(rx: mpsc::UnboundedReceiver<Snapshot>, cancel: impl FnOnce() + Send + 'static) -> Self {
        Subscription {
            rx,
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Waits for the next snapshot. Returns `None` once the store side is gone.
    pub async fn next(&mut self) -> Option<Snapshot> {
        self.rx.recv().await
    }

    /// Unsubscribes. Snapshots still in flight are discarded.
    pub fn close(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        self.rx.close();
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Hosted document database as seen by the client.
pub trait DocumentStore: Send + Sync {
    /// Opens a live query. Every change delivers the full matching set.
    fn subscribe<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, Result<Subscription>>;

    /// Adds a document and returns its new id.
    fn create<'a>(&'a self, collection: &'a str, doc: FieldMap) -> BoxFuture<'a, Result<NoteId>>;

    /// Writes a document; with `merge` only the given fields change.
    fn set<'a>(
        &'a self,
        collection: &'a str,
        id: &'a NoteId,
        doc: FieldMap,
        merge: bool,
    ) -> BoxFuture<'a, Result<()>>;

    fn delete<'a>(&'a self, collection: &'a str, id: &'a NoteId) -> BoxFuture<'a, Result<()>>;

    /// One-shot read. `Ok(None)` when the document does not exist.
    fn get_once<'a>(
        &'a self,
        collection: &'a str,
        id: &'a NoteId,
    ) -> BoxFuture<'a, Result<Option<FieldMap>>>;
}

/// External image hosting.
pub trait ImageHost: Send + Sync {
    /// Uploads raw image bytes and returns the public URL.
    fn upload(&self, bytes: Vec<u8>) -> BoxFuture<'_, Result<String>>;
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
