// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Image host that keeps uploads in memory.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tokio::sync::Mutex;
use tracing::debug;

use jt_core::{BoxFuture, Error, ImageHost, Result};

/// Content-addressed uploads served under `base_url`.
#[derive(Clone)]
pub struct MemoryImageHost {
    base_url: String,
    uploads: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    fail: Arc<AtomicBool>,
}

impl MemoryImageHost {
    pub fn new(base_url: impl Into<String>) -> Self {
        MemoryImageHost {
            base_url: base_url.into(),
            uploads: Arc::new(Mutex::new(Vec::new())),
            fail: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Makes every following upload fail until switched back.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub async fn upload_count(&self) -> usize {
        self.uploads.lock().await.len()
    }
}

impl ImageHost for MemoryImageHost {
    fn upload(&self, bytes: Vec<u8>) -> BoxFuture<'_, Result<String>> {
        Box::pin(async move {
            if self.fail.load(Ordering::SeqCst) {
                return Err(Error::Upload("image host unavailable".into()));
            }
            if bytes.is_empty() {
                return Err(Error::Upload("empty file".into()));
            }

            let hash = Sha256::digest(&bytes);
            let url = format!(
                "{}/{}.img",
                self.base_url.trim_end_matches('/'),
                hex::encode(&hash[..8])
            );
            debug!("stored {} byte image at {}", bytes.len(), url);
            self.uploads.lock().await.push((url.clone(), bytes));
            Ok(url)
        })
    }
}

#[cfg(test)]
#[path = "images_tests.rs"]
mod tests;
