// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-process document store with live queries.
//!
//! Every write resolves server timestamps against the store clock, then
//! pushes the full matching result set to each live query the write touched.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tokio::sync::{mpsc, watch, Mutex};
use tracing::{debug, info, warn};

use jt_core::{
    BoxFuture, ClockSource, Document, DocumentStore, Error, FieldMap, NoteId, Query, Result,
    Snapshot, Subscription, SystemClock, Value,
};

/// Shared store handle. Clones address the same data.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    /// Documents per collection, ordered by id.
    data: Mutex<BTreeMap<String, Collection>>,
    /// Live queries.
    listeners: Mutex<Vec<Listener>>,
    clock: Box<dyn ClockSource>,
    /// Seed for id generation.
    id_counter: AtomicU64,
    /// Open subscriptions not yet cancelled.
    active: Arc<AtomicUsize>,
    fail_subscribe: AtomicBool,
    fail_writes: AtomicBool,
    /// While true, writes wait before touching data.
    writes_paused: watch::Sender<bool>,
}

#[derive(Default)]
struct Collection {
    docs: BTreeMap<NoteId, FieldMap>,
    /// Every id ever issued, so deleted ids are never handed out again.
    issued: BTreeSet<NoteId>,
}

struct Listener {
    query: Query,
    tx: mpsc::UnboundedSender<Snapshot>,
}

impl MemoryStore {
    /// Creates an empty store on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates an empty store with a custom clock (for testing).
    pub fn with_clock(clock: impl ClockSource + 'static) -> Self {
        let (writes_paused, _) = watch::channel(false);
        MemoryStore {
            inner: Arc::new(StoreInner {
                data: Mutex::new(BTreeMap::new()),
                listeners: Mutex::new(Vec::new()),
                clock: Box::new(clock),
                id_counter: AtomicU64::new(0),
                active: Arc::new(AtomicUsize::new(0)),
                fail_subscribe: AtomicBool::new(false),
                fail_writes: AtomicBool::new(false),
                writes_paused,
            }),
        }
    }

    /// Inserts documents as-is, keeping their ids and timestamps.
    pub async fn seed(&self, collection: &str, documents: Vec<Document>) {
        let mut data = self.inner.data.lock().await;
        let coll = data.entry(collection.to_string()).or_default();
        for doc in documents {
            coll.issued.insert(doc.id.clone());
            coll.docs.insert(doc.id, doc.fields);
        }
        info!("seeded collection {} ({} documents)", collection, coll.docs.len());
    }

    /// Number of subscriptions that have not been closed.
    pub fn active_subscriptions(&self) -> usize {
        self.inner.active.load(Ordering::SeqCst)
    }

    pub async fn document_count(&self, collection: &str) -> usize {
        let data = self.inner.data.lock().await;
        data.get(collection).map_or(0, |c| c.docs.len())
    }

    /// Makes the next `subscribe` calls fail.
    pub fn set_fail_subscribe(&self, fail: bool) {
        self.inner.fail_subscribe.store(fail, Ordering::SeqCst);
    }

    /// Makes create, set and delete fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Holds writes in flight until [`resume_writes`](Self::resume_writes).
    pub fn pause_writes(&self) {
        self.inner.writes_paused.send_replace(true);
    }

    pub fn resume_writes(&self) {
        self.inner.writes_paused.send_replace(false);
    }

    async fn before_write(&self) -> Result<()> {
        let mut paused = self.inner.writes_paused.subscribe();
        while *paused.borrow_and_update() {
            if paused.changed().await.is_err() {
                break;
            }
        }
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::Store("permission denied".into()));
        }
        Ok(())
    }

    fn next_id(&self, collection: &str, coll: &Collection) -> NoteId {
        loop {
            let n = self.inner.id_counter.fetch_add(1, Ordering::SeqCst);
            let input = format!("{}{}{}", collection, n, self.inner.clock.now_ms());
            let hash = Sha256::digest(input.as_bytes());
            let id = NoteId::new(hex::encode(&hash[..10]));
            if !coll.issued.contains(&id) {
                return id;
            }
        }
    }

    /// Replaces server timestamp sentinels with the store clock, never going
    /// backwards relative to the stored value of the same field.
    fn resolve_timestamps(&self, doc: &mut FieldMap, previous: Option<&FieldMap>) {
        let now = self.inner.clock.now();
        for (name, value) in doc.iter_mut() {
            if !value.is_server_timestamp() {
                continue;
            }
            let prior = previous
                .and_then(|p| p.get(name))
                .and_then(Value::as_datetime);
            let resolved = match prior {
                Some(p) if p > now => p,
                _ => now,
            };
            *value = Value::from(resolved);
        }
    }

    /// Pushes fresh snapshots to listeners whose result set may have changed.
    async fn notify(&self, collection: &str, before: Option<&FieldMap>, after: Option<&FieldMap>) {
        let data = self.inner.data.lock().await;
        let mut listeners = self.inner.listeners.lock().await;
        listeners.retain(|l| !l.tx.is_closed());

        for listener in listeners.iter() {
            let query = &listener.query;
            if query.collection != collection {
                continue;
            }
            let touched = before.is_some_and(|d| query.matches(d))
                || after.is_some_and(|d| query.matches(d));
            if !touched {
                continue;
            }
            let snapshot = snapshot_for(&data, query);
            debug!("push {} documents to listener on {}", snapshot.len(), collection);
            if listener.tx.send(snapshot).is_err() {
                debug!("listener went away during push");
            }
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn snapshot_for(data: &BTreeMap<String, Collection>, query: &Query) -> Snapshot {
    let documents = data
        .get(&query.collection)
        .map(|coll| {
            coll.docs
                .iter()
                .filter(|(_, fields)| query.matches(fields))
                .map(|(id, fields)| Document {
                    id: id.clone(),
                    fields: fields.clone(),
                })
                .collect()
        })
        .unwrap_or_default();
    Snapshot::new(documents)
}

impl DocumentStore for MemoryStore {
    fn subscribe<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, Result<Subscription>> {
        Box::pin(async move {
            if self.inner.fail_subscribe.load(Ordering::SeqCst) {
                warn!("rejecting subscription on {}", query.collection);
                return Err(Error::Store("query could not be established".into()));
            }

            let (tx, rx) = mpsc::unbounded_channel();
            {
                // Register under the data lock so no write slips between the
                // initial snapshot and the first push.
                let data = self.inner.data.lock().await;
                let initial = snapshot_for(&data, query);
                let _ = tx.send(initial);
                self.inner.listeners.lock().await.push(Listener {
                    query: query.clone(),
                    tx,
                });
            }

            let active = Arc::clone(&self.inner.active);
            active.fetch_add(1, Ordering::SeqCst);
            debug!("subscription opened on {}", query.collection);

            Ok(Subscription::new(rx, move || {
                active.fetch_sub(1, Ordering::SeqCst);
                debug!("subscription closed");
            }))
        })
    }

    fn create<'a>(&'a self, collection: &'a str, doc: FieldMap) -> BoxFuture<'a, Result<NoteId>> {
        Box::pin(async move {
            self.before_write().await?;

            let mut doc = doc;
            self.resolve_timestamps(&mut doc, None);
            let id = {
                let mut data = self.inner.data.lock().await;
                let coll = data.entry(collection.to_string()).or_default();
                let id = self.next_id(collection, coll);
                coll.issued.insert(id.clone());
                coll.docs.insert(id.clone(), doc.clone());
                id
            };
            debug!("created {}/{}", collection, id);

            self.notify(collection, None, Some(&doc)).await;
            Ok(id)
        })
    }

    fn set<'a>(
        &'a self,
        collection: &'a str,
        id: &'a NoteId,
        doc: FieldMap,
        merge: bool,
    ) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            self.before_write().await?;

            let (before, after) = {
                let mut data = self.inner.data.lock().await;
                let coll = data.entry(collection.to_string()).or_default();
                let before = coll.docs.get(id).cloned();

                let mut doc = doc;
                self.resolve_timestamps(&mut doc, before.as_ref());
                let after = match (&before, merge) {
                    (Some(existing), true) => {
                        let mut merged = existing.clone();
                        merged.extend(doc);
                        merged
                    }
                    _ => doc,
                };
                coll.issued.insert(id.clone());
                coll.docs.insert(id.clone(), after.clone());
                (before, after)
            };
            debug!("set {}/{} (merge: {})", collection, id, merge);

            self.notify(collection, before.as_ref(), Some(&after)).await;
            Ok(())
        })
    }

    fn delete<'a>(&'a self, collection: &'a str, id: &'a NoteId) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            self.before_write().await?;

            let before = {
                let mut data = self.inner.data.lock().await;
                data.get_mut(collection).and_then(|c| c.docs.remove(id))
            };
            match before {
                Some(before) => {
                    debug!("deleted {}/{}", collection, id);
                    self.notify(collection, Some(&before), None).await;
                }
                None => debug!("delete of missing {}/{} ignored", collection, id),
            }
            Ok(())
        })
    }

    fn get_once<'a>(
        &'a self,
        collection: &'a str,
        id: &'a NoteId,
    ) -> BoxFuture<'a, Result<Option<FieldMap>>> {
        Box::pin(async move {
            let data = self.inner.data.lock().await;
            Ok(data.get(collection).and_then(|c| c.docs.get(id).cloned()))
        })
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
