// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[tokio::test]
async fn upload_returns_url_under_base() {
    let host = MemoryImageHost::new("https://img.test/");
    let url = host.upload(vec![1, 2, 3]).await.unwrap();

    assert!(url.starts_with("https://img.test/"));
    assert!(url.ends_with(".img"));
    assert_eq!(host.upload_count().await, 1);
}

#[tokio::test]
async fn same_bytes_same_url() {
    let host = MemoryImageHost::new("https://img.test");
    let a = host.upload(vec![9; 4]).await.unwrap();
    let b = host.upload(vec![9; 4]).await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn failing_host_reports_upload_error() {
    let host = MemoryImageHost::new("https://img.test");
    host.set_fail(true);

    let err = host.upload(vec![1]).await.unwrap_err();
    assert!(matches!(err, Error::Upload(_)));
    assert_eq!(host.upload_count().await, 0);
}

#[tokio::test]
async fn empty_upload_rejected() {
    let host = MemoryImageHost::new("https://img.test");
    assert!(host.upload(Vec::new()).await.is_err());
}
