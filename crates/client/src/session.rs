// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Identity boundary between the auth state and the note list.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use jt_core::{Error as CoreError, Identity, IdentitySource};

use crate::error::Result;
use crate::sync::LiveListSynchronizer;

#[derive(Clone)]
pub struct SessionGate {
    source: Arc<dyn IdentitySource>,
}

impl SessionGate {
    pub fn new(source: Arc<dyn IdentitySource>) -> Self {
        SessionGate { source }
    }

    pub fn current(&self) -> Option<Identity> {
        self.source.current()
    }

    /// The signed-in identity.
    ///
    /// # Errors
    ///
    /// [`NotSignedIn`](jt_core::Error::NotSignedIn) when nobody is signed in;
    /// callers treat it as a redirect to sign-in.
    pub fn require(&self) -> Result<Identity> {
        self.source
            .current()
            .ok_or_else(|| CoreError::NotSignedIn.into())
    }

    /// Keeps `sync` following the signed-in identity.
    ///
    /// Opens for the current identity right away, then reopens or closes on
    /// every change. Runs until the identity source goes away.
    pub fn drive(&self, sync: Arc<LiveListSynchronizer>) -> JoinHandle<()> {
        let mut rx = self.source.watch();
        tokio::spawn(async move {
            let mut applied: Option<Option<Identity>> = None;
            loop {
                let current = rx.borrow_and_update().clone();
                if applied.as_ref() != Some(&current) {
                    follow(&sync, current.clone()).await;
                    applied = Some(current);
                }
                if rx.changed().await.is_err() {
                    debug!("identity source closed");
                    break;
                }
            }
        })
    }
}

async fn follow(sync: &LiveListSynchronizer, identity: Option<Identity>) {
    match identity {
        Some(identity) => {
            info!("signed in as {}", identity);
            if let Err(e) = sync.open(identity).await {
                warn!("note list unavailable: {}", e);
            }
        }
        None => {
            info!("signed out");
            sync.close();
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
