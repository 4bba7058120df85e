// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn counting_subscription() -> (
    mpsc::UnboundedSender<Snapshot>,
    Subscription,
    Arc<AtomicUsize>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let cancels = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&cancels);
    let sub = Subscription::new(rx, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (tx, sub, cancels)
}

#[test]
fn query_owned_by_matches_owner_field() {
    let query = Query::owned_by("notes", &Identity::new("u1"));
    let mut doc = FieldMap::new();
    assert!(!query.matches(&doc));

    doc.insert(fields::OWNER_ID.into(), Value::from("u2"));
    assert!(!query.matches(&doc));

    doc.insert(fields::OWNER_ID.into(), Value::from("u1"));
    assert!(query.matches(&doc));
}

#[tokio::test]
async fn subscription_yields_in_order() {
    let (tx, mut sub, _) = counting_subscription();
    let a = Document {
        id: NoteId::new("a"),
        fields: FieldMap::new(),
    };
    tx.send(Snapshot::new(vec![a.clone()])).unwrap();
    tx.send(Snapshot::default()).unwrap();

    assert_eq!(sub.next().await.unwrap().documents, vec![a]);
    assert!(sub.next().await.unwrap().is_empty());
}

#[tokio::test]
async fn subscription_ends_when_sender_dropped() {
    let (tx, mut sub, _) = counting_subscription();
    drop(tx);
    assert!(sub.next().await.is_none());
}

#[test]
fn close_cancels_once() {
    let (tx, sub, cancels) = counting_subscription();
    sub.close();
    assert_eq!(cancels.load(Ordering::SeqCst), 1);
    // Receiver is closed, so the store side sees the subscription gone.
    assert!(tx.send(Snapshot::default()).is_err());
}

#[test]
fn drop_cancels_once() {
    let (_tx, sub, cancels) = counting_subscription();
    drop(sub);
    assert_eq!(cancels.load(Ordering::SeqCst), 1);
}
