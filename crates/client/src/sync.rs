// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Live note list for one owner.
//!
//! The synchronizer holds at most one store subscription. Every snapshot the
//! store pushes replaces the whole list, which is then sorted on
//! `updated_at` and published on a watch channel.
//!
//! Each `open` or `close` starts a new generation. The pump task of a
//! subscription remembers the generation it was started in, and a push is
//! applied only while that generation is still current. The check happens
//! under the same lock that applies the push, so nothing from a torn-down
//! subscription ever reaches the published list.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use jt_core::{DocumentStore, Identity, Note, Query, Snapshot, SortOrder, Subscription};

use crate::error::Result;

/// What the dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    /// Sorted by `updated_at` in `sort_order`.
    pub notes: Vec<Note>,
    /// True from `open` until the first push or a setup failure.
    pub loading: bool,
    pub sort_order: SortOrder,
    pub owner: Option<Identity>,
    /// Why the last subscription could not be established.
    pub error: Option<String>,
}

impl ListState {
    fn new(sort_order: SortOrder) -> Self {
        ListState {
            notes: Vec::new(),
            loading: false,
            sort_order,
            owner: None,
            error: None,
        }
    }
}

/// Stable sort on `updated_at` millis, missing as 0.
pub fn sort_notes(notes: &mut [Note], order: SortOrder) {
    match order {
        SortOrder::Asc => notes.sort_by_key(Note::sort_key),
        SortOrder::Desc => notes.sort_by(|a, b| b.sort_key().cmp(&a.sort_key())),
    }
}

struct Control {
    generation: u64,
    pump: Option<JoinHandle<()>>,
}

struct Shared {
    control: Mutex<Control>,
    tx: watch::Sender<ListState>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Control> {
        self.control.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub struct LiveListSynchronizer {
    store: Arc<dyn DocumentStore>,
    collection: String,
    shared: Arc<Shared>,
}

impl LiveListSynchronizer {
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self::with_sort_order(store, collection, SortOrder::default())
    }

    pub fn with_sort_order(
        store: Arc<dyn DocumentStore>,
        collection: impl Into<String>,
        sort_order: SortOrder,
    ) -> Self {
        let (tx, _) = watch::channel(ListState::new(sort_order));
        LiveListSynchronizer {
            store,
            collection: collection.into(),
            shared: Arc::new(Shared {
                control: Mutex::new(Control {
                    generation: 0,
                    pump: None,
                }),
                tx,
            }),
        }
    }

    /// Watches published list states.
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.shared.tx.subscribe()
    }

    /// The latest published state.
    pub fn state(&self) -> ListState {
        self.shared.tx.borrow().clone()
    }

    pub fn sort_order(&self) -> SortOrder {
        self.shared.tx.borrow().sort_order
    }

    /// Starts following `identity`'s notes, replacing any current subscription.
    ///
    /// On failure the list is published empty with the error message and
    /// loading finished; calling `open` again retries.
    pub async fn open(&self, identity: Identity) -> Result<()> {
        let generation = {
            let mut control = self.shared.lock();
            teardown(&mut control);
            self.shared.tx.send_modify(|s| {
                s.notes.clear();
                s.loading = true;
                s.owner = Some(identity.clone());
                s.error = None;
            });
            control.generation
        };

        let query = Query::owned_by(&self.collection, &identity);
        let result = self.store.subscribe(&query).await;

        let mut control = self.shared.lock();
        if control.generation != generation {
            debug!("subscription for {} superseded before it opened", identity);
            return Ok(());
        }
        match result {
            Ok(subscription) => {
                info!("subscribed to notes of {}", identity);
                let shared = Arc::clone(&self.shared);
                control.pump = Some(tokio::spawn(pump(subscription, generation, shared)));
                Ok(())
            }
            Err(e) => {
                warn!("failed to subscribe to notes of {}: {}", identity, e);
                let message = e.to_string();
                self.shared.tx.send_modify(|s| {
                    s.notes.clear();
                    s.loading = false;
                    s.error = Some(message);
                });
                Err(e.into())
            }
        }
    }

    /// Stops following and clears the list.
    pub fn close(&self) {
        let mut control = self.shared.lock();
        teardown(&mut control);
        self.shared.tx.send_modify(|s| {
            s.notes.clear();
            s.loading = false;
            s.owner = None;
            s.error = None;
        });
        debug!("note list closed");
    }

    /// Re-sorts the current list locally. No backend call is made.
    pub fn set_sort_order(&self, order: SortOrder) {
        let _control = self.shared.lock();
        self.shared.tx.send_modify(|s| {
            s.sort_order = order;
            sort_notes(&mut s.notes, order);
        });
    }

    pub fn toggle_sort(&self) -> SortOrder {
        let order = self.sort_order().toggled();
        self.set_sort_order(order);
        order
    }
}

impl Drop for LiveListSynchronizer {
    fn drop(&mut self) {
        let mut control = self.shared.lock();
        teardown(&mut control);
    }
}

/// Invalidates the current generation and stops its pump.
fn teardown(control: &mut Control) {
    control.generation += 1;
    if let Some(pump) = control.pump.take() {
        // Dropping the task drops its subscription, which detaches it
        // from the store.
        pump.abort();
    }
}

async fn pump(mut subscription: Subscription, generation: u64, shared: Arc<Shared>) {
    while let Some(snapshot) = subscription.next().await {
        if !apply(&shared, generation, snapshot) {
            break;
        }
    }
    debug!("pump for generation {} finished", generation);
}

/// Publishes `snapshot` if `generation` is still current.
fn apply(shared: &Shared, generation: u64, snapshot: Snapshot) -> bool {
    let control = shared.lock();
    if control.generation != generation {
        debug!("dropping stale push from generation {}", generation);
        return false;
    }

    let mut notes: Vec<Note> = snapshot
        .documents
        .into_iter()
        .map(|doc| Note::from_document(doc.id, &doc.fields))
        .collect();
    let count = notes.len();

    shared.tx.send_modify(|s| {
        sort_notes(&mut notes, s.sort_order);
        s.notes = notes;
        s.loading = false;
        s.error = None;
    });
    debug!("applied push with {} notes", count);
    true
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
